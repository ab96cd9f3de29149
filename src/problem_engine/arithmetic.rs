//! Integer and exact-decimal helpers shared by every topic generator.
//!
//! Generators never use floating point: decimal operands are drawn as whole
//! hundredths (or tenths) and carried as [`Fixed`] so the answer printed in
//! the key is exactly what the operands on the problem line produce.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::problem_engine::error::GenerateError;

/// Greatest common divisor (Euclid). Always non-negative; `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a as i64
}

/// Least common multiple, non-negative; `0` if either argument is `0`.
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b) * b).abs()
}

/// Division rounding toward negative infinity.
pub fn floor_div(a: i64, b: i64) -> Result<i64, GenerateError> {
    if b == 0 {
        return Err(GenerateError::ZeroDivisor);
    }
    let q = a.checked_div(b).ok_or(GenerateError::Overflow)?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        Ok(q - 1)
    } else {
        Ok(q)
    }
}

/// Reduce `num/den` to lowest terms.
///
/// A zero denominator returns `(num, 1)` rather than failing; callers that
/// care about the math must reject `den == 0` themselves.
pub fn simplify_fraction(num: i64, den: i64) -> (i64, i64) {
    if den == 0 {
        return (num, 1);
    }
    let g = gcd(num, den);
    (num / g, den / g)
}

/// Render a fraction in lowest terms with a positive denominator.
///
/// Whole results print as integers: `format_fraction(4, 2) == "2"`.
pub fn format_fraction(num: i64, den: i64) -> String {
    let (num, den) = simplify_fraction(num, den);
    match den {
        1 => num.to_string(),
        -1 => (-num).to_string(),
        d if d < 0 => format!("{}/{}", -num, -d),
        d => format!("{num}/{d}"),
    }
}

/// Largest scale whose power of ten fits in `i64`.
const MAX_SCALE: u32 = 18;

fn pow10(exp: u32) -> i64 {
    10i64.pow(exp)
}

fn round_half_away(num: i64, den: i64) -> i64 {
    let q = num / den;
    let r = num % den;
    if 2 * r.abs() >= den.abs() {
        if (num < 0) != (den < 0) { q - 1 } else { q + 1 }
    } else {
        q
    }
}

// ---------------------------------------------------------------------------
// Fixed-point decimals
// ---------------------------------------------------------------------------

/// Exact decimal `units × 10^-scale`, kept without trailing zeros.
///
/// Because the representation is normalized, derived equality compares
/// values: `Fixed::new(350, 2) == Fixed::new(35, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fixed {
    units: i64,
    scale: u32,
}

impl Fixed {
    pub fn new(units: i64, scale: u32) -> Self {
        Fixed { units, scale }.normalized()
    }

    pub fn from_int(value: i64) -> Self {
        Fixed { units: value, scale: 0 }
    }

    /// `num / den` rounded half away from zero to `scale` decimal places.
    pub fn ratio(num: i64, den: i64, scale: u32) -> Result<Self, GenerateError> {
        if den == 0 {
            return Err(GenerateError::ZeroDivisor);
        }
        let scaled = 10i64
            .checked_pow(scale)
            .and_then(|factor| num.checked_mul(factor))
            .ok_or(GenerateError::Overflow)?;
        Ok(Fixed::new(round_half_away(scaled, den), scale))
    }

    pub fn units(self) -> i64 {
        self.units
    }

    pub fn scale(self) -> u32 {
        self.scale
    }

    /// Round half away from zero to at most `scale` decimal places.
    pub fn round_to(self, scale: u32) -> Self {
        if self.scale <= scale {
            return self;
        }
        Fixed::new(round_half_away(self.units, pow10(self.scale - scale)), scale)
    }

    fn normalized(mut self) -> Self {
        while self.scale > 0 && self.units % 10 == 0 {
            self.units /= 10;
            self.scale -= 1;
        }
        self
    }

    fn widened(self, scale: u32) -> Result<i64, GenerateError> {
        10i64
            .checked_pow(scale - self.scale)
            .and_then(|factor| self.units.checked_mul(factor))
            .ok_or(GenerateError::Overflow)
    }

    /// Sum, or [`GenerateError::Overflow`] when the aligned units leave `i64`.
    pub fn checked_add(self, rhs: Fixed) -> Result<Fixed, GenerateError> {
        let scale = self.scale.max(rhs.scale);
        let units = self
            .widened(scale)?
            .checked_add(rhs.widened(scale)?)
            .ok_or(GenerateError::Overflow)?;
        Ok(Fixed::new(units, scale))
    }

    pub fn checked_sub(self, rhs: Fixed) -> Result<Fixed, GenerateError> {
        let rhs_neg = rhs.units.checked_neg().ok_or(GenerateError::Overflow)?;
        self.checked_add(Fixed { units: rhs_neg, scale: rhs.scale })
    }

    pub fn checked_mul(self, rhs: Fixed) -> Result<Fixed, GenerateError> {
        let units = self.units.checked_mul(rhs.units).ok_or(GenerateError::Overflow)?;
        let scale = self.scale.checked_add(rhs.scale).ok_or(GenerateError::Overflow)?;
        if scale > MAX_SCALE {
            return Err(GenerateError::Overflow);
        }
        Ok(Fixed::new(units, scale))
    }
}

// The operators below overflow like plain `i64` arithmetic. They are kept
// for bounded operands; generators go through the `checked_*` forms.

impl From<i64> for Fixed {
    fn from(value: i64) -> Self {
        Fixed::from_int(value)
    }
}

impl Add for Fixed {
    type Output = Fixed;

    fn add(self, rhs: Fixed) -> Fixed {
        let scale = self.scale.max(rhs.scale);
        let align = |f: Fixed| f.units * pow10(scale - f.scale);
        Fixed::new(align(self) + align(rhs), scale)
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    fn sub(self, rhs: Fixed) -> Fixed {
        self + (-rhs)
    }
}

impl Mul for Fixed {
    type Output = Fixed;

    fn mul(self, rhs: Fixed) -> Fixed {
        Fixed::new(self.units * rhs.units, self.scale + rhs.scale)
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    fn neg(self) -> Fixed {
        Fixed { units: -self.units, scale: self.scale }
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.units < 0 { "-" } else { "" };
        let abs = self.units.unsigned_abs();
        if self.scale == 0 {
            return write!(f, "{sign}{abs}");
        }
        let p = 10u64.pow(self.scale);
        write!(
            f,
            "{sign}{}.{:0width$}",
            abs / p,
            abs % p,
            width = self.scale as usize
        )
    }
}
