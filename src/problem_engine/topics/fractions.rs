//! Unit 2: fractions and decimals.
//!
//! Fraction answers always go through `format_fraction`, so they are in
//! lowest terms with a positive denominator. Decimal operands are drawn as
//! whole hundredths and carried as [`Fixed`]; the answer is exact except for
//! the product, which is rounded to two places. Decimal arithmetic goes
//! through the checked forms so an overflow is a retryable draw.

use rand::Rng;

use crate::problem_engine::{
    arithmetic::{format_fraction, lcm, Fixed},
    error::GenerateError,
    helpers::pick,
    models::{Problem, Tier},
};

pub fn generate_fraction_addition<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match tier {
        Tier::Beginner => {
            // Like denominators
            let den = rng.gen_range(2..=12i64);
            let n1 = rng.gen_range(1..=10i64);
            let n2 = rng.gen_range(1..=10i64);
            Problem::new(format!("{n1}/{den} + {n2}/{den}"), format_fraction(n1 + n2, den))
        }
        Tier::Intermediate => {
            // One denominator is a multiple of the other
            let d1 = pick(rng, &[2i64, 3, 4, 5]);
            let d2 = d1 * rng.gen_range(2..=3i64);
            let n1 = rng.gen_range(1..=5i64);
            let n2 = rng.gen_range(1..=8i64);
            Problem::new(format!("{n1}/{d1} + {n2}/{d2}"), sum_over_lcm(n1, d1, n2, d2))
        }
        Tier::Advanced => {
            let d1 = rng.gen_range(2..=8i64);
            let d2 = rng.gen_range(2..=8i64);
            let n1 = rng.gen_range(1..=10i64);
            let n2 = rng.gen_range(1..=10i64);
            Problem::new(format!("{n1}/{d1} + {n2}/{d2}"), sum_over_lcm(n1, d1, n2, d2))
        }
    }
}

fn sum_over_lcm(n1: i64, d1: i64, n2: i64, d2: i64) -> String {
    let common = lcm(d1, d2);
    format_fraction(n1 * (common / d1) + n2 * (common / d2), common)
}

pub fn generate_fraction_multiplication<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match tier {
        Tier::Beginner => {
            let n1 = rng.gen_range(1..=6i64);
            let d1 = rng.gen_range(2..=8i64);
            let n2 = rng.gen_range(1..=6i64);
            let d2 = rng.gen_range(2..=8i64);
            Problem::new(format!("{n1}/{d1} × {n2}/{d2}"), format_fraction(n1 * n2, d1 * d2))
        }
        Tier::Intermediate => {
            let n1 = rng.gen_range(1..=12i64);
            let d1 = rng.gen_range(2..=12i64);
            let n2 = rng.gen_range(-12..=12i64);
            let d2 = rng.gen_range(2..=12i64);
            let second = if n2 < 0 { format!("({n2}/{d2})") } else { format!("{n2}/{d2}") };
            Problem::new(format!("{n1}/{d1} × {second}"), format_fraction(n1 * n2, d1 * d2))
        }
        Tier::Advanced => {
            // Division: the divisor's numerator is drawn from 1.., never zero.
            let n1 = rng.gen_range(1..=10i64);
            let d1 = rng.gen_range(2..=10i64);
            let n2 = rng.gen_range(1..=10i64);
            let d2 = rng.gen_range(2..=10i64);
            Problem::new(format!("{n1}/{d1} ÷ {n2}/{d2}"), format_fraction(n1 * d2, d1 * n2))
        }
    }
}

pub fn generate_decimal_operations<R: Rng>(rng: &mut R, tier: Tier) -> Result<Problem, GenerateError> {
    let problem = match tier {
        Tier::Beginner => {
            let a = Fixed::new(rng.gen_range(10..=1_000), 2);
            let b = Fixed::new(rng.gen_range(10..=1_000), 2);
            Problem::new(format!("{a} + {b}"), a.checked_add(b)?.to_string())
        }
        Tier::Intermediate => {
            let a = Fixed::new(rng.gen_range(10..=10_000), 2);
            let b = Fixed::new(rng.gen_range(10..=10_000), 2);
            Problem::new(format!("{a} - {b}"), a.checked_sub(b)?.to_string())
        }
        Tier::Advanced => {
            let a = Fixed::new(rng.gen_range(10..=1_000), 2);
            let b = Fixed::new(rng.gen_range(10..=1_000), 2);
            Problem::new(format!("{a} × {b}"), a.checked_mul(b)?.round_to(2).to_string())
        }
    };
    Ok(problem)
}
