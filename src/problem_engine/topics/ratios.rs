//! Unit 5: ratios, proportions, percentages and simple interest.
//!
//! Proportions follow the same rule as fraction equations: the missing term
//! is derived with floor division and the drawn value is the answer. A draw
//! that would print a zero denominator is rejected with
//! [`GenerateError::ZeroDivisor`] and retried by the assembler.

use rand::Rng;

use crate::problem_engine::{
    arithmetic::{floor_div, gcd, Fixed},
    error::GenerateError,
    helpers::{money, pick, solution},
    models::{Problem, Tier},
};

pub fn generate_ratio<R: Rng>(rng: &mut R, tier: Tier) -> Result<Problem, GenerateError> {
    let problem = match tier {
        Tier::Beginner => {
            let a = rng.gen_range(1..=12i64) * 2;
            let b = rng.gen_range(1..=12i64) * 2;
            let g = gcd(a, b);
            Problem::new(format!("Simplify ratio {a}:{b}"), format!("{}:{}", a / g, b / g))
        }
        Tier::Intermediate => {
            let a = rng.gen_range(1..=20i64);
            let b = rng.gen_range(1..=20i64);
            let c = rng.gen_range(1..=20i64);
            let g = gcd(gcd(a, b), c);
            Problem::new(
                format!("Simplify ratio {a}:{b}:{c}"),
                format!("{}:{}:{}", a / g, b / g, c / g),
            )
        }
        Tier::Advanced => {
            // Unit rate
            let distance = rng.gen_range(100..=500i64);
            let hours = pick(rng, &[2i64, 4, 5, 10]);
            Problem::new(
                format!("Find unit rate: {distance} miles in {hours} hours"),
                format!("{} mph", Fixed::ratio(distance, hours, 2)?),
            )
        }
    };
    Ok(problem)
}

pub fn generate_proportion<R: Rng>(rng: &mut R, tier: Tier) -> Result<Problem, GenerateError> {
    let problem = match tier {
        Tier::Beginner => {
            let a = rng.gen_range(2..=12i64);
            let b = rng.gen_range(2..=12i64);
            let x = rng.gen_range(2..=20i64);
            let c = floor_div(a * x, b)?;
            if c == 0 {
                return Err(GenerateError::ZeroDivisor);
            }
            Problem::new(format!("{a}/{b} = x/{c}"), solution(x))
        }
        Tier::Intermediate => {
            let a = rng.gen_range(2..=15i64);
            let b = rng.gen_range(2..=15i64);
            let x = rng.gen_range(3..=25i64);
            let c = floor_div(a * x, b)?;
            Problem::new(format!("x/{a} = {c}/{b}"), solution(x))
        }
        Tier::Advanced => {
            let a = rng.gen_range(2..=20i64);
            let b = rng.gen_range(2..=20i64);
            let c = rng.gen_range(2..=20i64);
            let x = floor_div(b * c, a)?;
            if x == 0 {
                return Err(GenerateError::ZeroDivisor);
            }
            Problem::new(format!("{a}/{b} = {c}/x"), solution(x))
        }
    };
    Ok(problem)
}

pub fn generate_percent<R: Rng>(rng: &mut R, tier: Tier) -> Result<Problem, GenerateError> {
    let problem = match tier {
        Tier::Beginner => {
            let percent = pick(rng, &[10i64, 20, 25, 50, 75]);
            let of = rng.gen_range(20..=200i64);
            Problem::new(format!("Find {percent}% of {of}"), Fixed::new(percent * of, 2).to_string())
        }
        Tier::Intermediate => {
            let percent = rng.gen_range(5..=95i64);
            let of = rng.gen_range(50..=500i64);
            Problem::new(
                format!("What is {percent}% of {of}?"),
                Fixed::new(percent * of, 2).to_string(),
            )
        }
        Tier::Advanced => {
            // Percent of change
            let original = rng.gen_range(50..=200i64);
            let change = rng.gen_range(10..=50i64);
            Problem::new(
                format!("Find percent increase from {original} to {}", original + change),
                format!("{}%", Fixed::ratio(change * 100, original, 1)?),
            )
        }
    };
    Ok(problem)
}

pub fn generate_simple_interest<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    let principal = rng.gen_range(100..=5_000i64);
    let rate = rng.gen_range(2..=8i64);
    let years = rng.gen_range(1..=10i64);
    // P·r%·t in dollars is exactly P·r·t cents.
    let interest_cents = principal * rate * years;

    match tier {
        Tier::Beginner => Problem::new(
            format!("I = Prt. Find I when P = ${principal}, r = {rate}%, t = {years} years"),
            money(interest_cents),
        ),
        Tier::Intermediate => Problem::new(
            format!("Find total amount: P = ${principal}, r = {rate}%, t = {years} years"),
            money(principal * 100 + interest_cents),
        ),
        Tier::Advanced => Problem::new(
            format!(
                "Find rate: P = ${principal}, I = {}, t = {years} years",
                money(interest_cents)
            ),
            format!("{rate}%"),
        ),
    }
}
