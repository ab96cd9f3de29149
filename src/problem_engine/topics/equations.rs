//! Unit 4: solving equations.
//!
//! Every generator draws the solution first and builds the equation around
//! it, so the answer line is always `x = <solution>`.
//!
//! ## Topics in this file
//!
//! - **One-step**: `x ± b = c` and `ax = c`.
//! - **Two-step**: `ax ± b = c`; tier 3 allows a negative leading
//!   coefficient (zero is redrawn).
//! - **Variables on both sides**: `ax + c = bx + d` with `a != b`, so the
//!   solution is unique. The right-hand constant is derived from the solution.
//! - **Distributive**: `a(x ± b) [+ c] = r`; tier 3 tries
//!   `a(x + b) = cx - cd` and falls back to `a(x - b) = r` when the two sides
//!   disagree at the drawn solution.
//! - **Fraction equations**: `nx/d ± b = r` where `r` is derived with floor
//!   division. The drawn solution is authoritative: when `d` does not divide
//!   `n·x` the printed equation is only approximately satisfied.

use rand::Rng;

use crate::problem_engine::{
    arithmetic::floor_div,
    error::GenerateError,
    helpers::{nonzero_or, pick, polynomial, signed_constant, solution},
    models::{Problem, Tier},
};

fn equation(lhs: String, rhs: impl std::fmt::Display, x: i64) -> Problem {
    Problem::new(format!("{lhs} = {rhs}"), solution(x))
}

pub fn generate_one_step_addition<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    let (x, b) = match tier {
        Tier::Beginner     => (rng.gen_range(1..=20i64), rng.gen_range(1..=20i64)),
        Tier::Intermediate => (rng.gen_range(-20..=20i64), -rng.gen_range(1..=20i64)),
        Tier::Advanced     => (rng.gen_range(-30..=30i64), nonzero_or(rng, -30..=30, 1..=30)),
    };
    equation(polynomial(&[(1, "x"), (b, "")]), x + b, x)
}

pub fn generate_one_step_multiplication<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    let (x, a) = match tier {
        Tier::Beginner     => (rng.gen_range(1..=15i64), rng.gen_range(2..=10i64)),
        Tier::Intermediate => (rng.gen_range(-15..=15i64), rng.gen_range(2..=10i64)),
        Tier::Advanced     => (rng.gen_range(-20..=20i64), nonzero_or(rng, -10..=10, 2..=10)),
    };
    equation(polynomial(&[(a, "x")]), a * x, x)
}

pub fn generate_two_step_equation<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    let (x, a, b) = match tier {
        Tier::Beginner => (
            rng.gen_range(1..=15i64),
            rng.gen_range(2..=8i64),
            rng.gen_range(1..=15i64),
        ),
        Tier::Intermediate => (
            rng.gen_range(-15..=15i64),
            rng.gen_range(2..=8i64),
            -rng.gen_range(-15..=15i64),
        ),
        Tier::Advanced => (
            rng.gen_range(-20..=20i64),
            nonzero_or(rng, -10..=10, 2..=8),
            rng.gen_range(-20..=20i64),
        ),
    };
    equation(polynomial(&[(a, "x"), (b, "")]), a * x + b, x)
}

pub fn generate_variables_both_sides<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    // ax + c = bx + d
    let (x, a, b, c) = match tier {
        Tier::Beginner => {
            let x = rng.gen_range(1..=15i64);
            let mut a = rng.gen_range(2..=8i64);
            let mut b = rng.gen_range(1..=8i64);
            let c = rng.gen_range(1..=15i64);
            if a <= b {
                (a, b) = (b + 1, a);
            }
            (x, a, b, c)
        }
        Tier::Intermediate => {
            let x = rng.gen_range(-15..=15i64);
            let mut a = rng.gen_range(3..=10i64);
            let b = rng.gen_range(1..=5i64);
            let c = rng.gen_range(-15..=15i64);
            if a == b {
                a += 1;
            }
            (x, a, b, c)
        }
        Tier::Advanced => {
            let x = rng.gen_range(-20..=20i64);
            let mut a = rng.gen_range(2..=12i64);
            let b = rng.gen_range(1..=8i64);
            let c = -rng.gen_range(-25..=25i64);
            if a == b {
                a += 1;
            }
            (x, a, b, c)
        }
    };
    let d = a * x + c - b * x;
    equation(
        polynomial(&[(a, "x"), (c, "")]),
        polynomial(&[(b, "x"), (d, "")]),
        x,
    )
}

pub fn generate_distributive_equation<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match tier {
        Tier::Beginner => {
            let x = rng.gen_range(1..=12i64);
            let a = rng.gen_range(2..=6i64);
            let b = rng.gen_range(1..=10i64);
            equation(format!("{a}(x - {b})"), a * x - a * b, x)
        }
        Tier::Intermediate => {
            let x = rng.gen_range(-12..=12i64);
            let a = rng.gen_range(2..=6i64);
            let b = rng.gen_range(1..=10i64);
            let c = rng.gen_range(1..=10i64);
            equation(format!("{a}(x + {b}) + {c}"), a * x + a * b + c, x)
        }
        Tier::Advanced => {
            // a(x + b) = c(x - d), kept only when both sides agree at x.
            let x = rng.gen_range(-15..=15i64);
            let a = rng.gen_range(2..=6i64);
            let b = rng.gen_range(1..=10i64);
            let c = rng.gen_range(2..=6i64);
            let d = rng.gen_range(1..=10i64);
            let left = a * x + a * b;
            let right = c * x - c * d;
            if left == right {
                equation(format!("{a}(x + {b})"), polynomial(&[(c, "x"), (-c * d, "")]), x)
            } else {
                equation(format!("{a}(x - {b})"), a * x - a * b, x)
            }
        }
    }
}

pub fn generate_fraction_equation<R: Rng>(rng: &mut R, tier: Tier) -> Result<Problem, GenerateError> {
    let problem = match tier {
        Tier::Beginner => {
            let x = rng.gen_range(2..=20i64);
            let den = pick(rng, &[2i64, 3, 4, 5]);
            let b = rng.gen_range(1..=15i64);
            let rhs = floor_div(x, den)? + b;
            equation(format!("x/{den} + {b}"), rhs, x)
        }
        Tier::Intermediate => {
            let x = rng.gen_range(-20..=20i64);
            let num = rng.gen_range(2..=8i64);
            let den = pick(rng, &[2i64, 3, 4, 5]);
            let b = rng.gen_range(1..=15i64);
            let rhs = floor_div(num * x, den)? + b;
            equation(format!("{num}x/{den} + {b}"), rhs, x)
        }
        Tier::Advanced => {
            let x = rng.gen_range(-15..=15i64);
            let num = rng.gen_range(2..=6i64);
            let den = pick(rng, &[2i64, 3, 4]);
            let b = rng.gen_range(-10..=10i64);
            let rhs = floor_div(num * x, den)? - b;
            equation(format!("{num}x/{den}{}", signed_constant(-b)), rhs, x)
        }
    };
    Ok(problem)
}
