//! Shared formatting and drawing helpers used across topic generators.
//!
//! Topic files focus on the math of one syllabus unit; everything about how a
//! number, term or polynomial is printed lives here so every generator renders
//! the same way.

use std::ops::RangeInclusive;

use rand::Rng;

/// Render terms in the given order, e.g. `[(3, "x²"), (-1, "x"), (4, "")]`
/// → `"3x² - x + 4"`.
///
/// Zero terms are dropped, unit coefficients are elided and signs are folded
/// into the joiner. An all-zero input renders as `"0"`.
pub fn polynomial(terms: &[(i64, &str)]) -> String {
    let mut out = String::new();
    for &(coef, var) in terms {
        if coef == 0 {
            continue;
        }
        let magnitude = coef.unsigned_abs();
        let body = if var.is_empty() {
            magnitude.to_string()
        } else if magnitude == 1 {
            var.to_string()
        } else {
            format!("{magnitude}{var}")
        };
        if out.is_empty() {
            if coef < 0 {
                out.push('-');
            }
        } else {
            out.push_str(if coef < 0 { " - " } else { " + " });
        }
        out.push_str(&body);
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

/// An operand that follows a binary operator: negatives get parentheses.
pub fn operand(n: i64) -> String {
    if n < 0 { format!("({n})") } else { n.to_string() }
}

/// `" + 5"`, `" - 5"`, or `""` for zero, for appending a constant to a term.
pub fn signed_constant(n: i64) -> String {
    match n {
        0 => String::new(),
        n if n < 0 => format!(" - {}", n.unsigned_abs()),
        n => format!(" + {n}"),
    }
}

/// `var^exp` with the trivial exponents collapsed.
pub fn power(var: &str, exp: u32) -> String {
    match exp {
        0 => "1".to_string(),
        1 => var.to_string(),
        e => format!("{var}^{e}"),
    }
}

/// Answer line for a solved equation.
pub fn solution(x: i64) -> String {
    format!("x = {x}")
}

/// Dollar amount from whole cents: `$1200` or `$1234.50`.
pub fn money(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    if abs % 100 == 0 {
        format!("{sign}${}", abs / 100)
    } else {
        format!("{sign}${}.{:02}", abs / 100, abs % 100)
    }
}

/// Bracketed data list, e.g. `[3, 14, 7]`.
pub fn list(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Draw from `range`; a zero is replaced by a draw from `fallback`.
///
/// `fallback` must not contain zero.
pub fn nonzero_or<R: Rng>(
    rng: &mut R,
    range: RangeInclusive<i64>,
    fallback: RangeInclusive<i64>,
) -> i64 {
    let v = rng.gen_range(range);
    if v == 0 { rng.gen_range(fallback) } else { v }
}

/// Uniform pick from a fixed, non-empty table of choices.
pub fn pick<R: Rng, T: Copy>(rng: &mut R, choices: &[T]) -> T {
    choices[rng.gen_range(0..choices.len())]
}
