//! Unit 3: expressions and properties.
//!
//! Problems and answers share the same `polynomial` renderer, so the answer
//! key is already in canonical order: `x²` term, then `x` term, then the
//! constant.

use rand::Rng;

use crate::problem_engine::{
    helpers::{nonzero_or, polynomial},
    models::{Problem, Tier},
};

pub fn generate_evaluate_expression<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    let x = rng.gen_range(1..=10i64);

    let (expr, value) = match tier {
        Tier::Beginner => {
            let a = rng.gen_range(1..=10i64);
            let b = rng.gen_range(1..=10i64);
            (polynomial(&[(a, "x"), (b, "")]), a * x + b)
        }
        Tier::Intermediate => {
            let a = rng.gen_range(1..=10i64);
            let b = rng.gen_range(1..=10i64);
            let c = rng.gen_range(1..=10i64);
            (polynomial(&[(a, "x²"), (b, "x"), (c, "")]), a * x * x + b * x + c)
        }
        Tier::Advanced => {
            let a = nonzero_or(rng, -10..=10, 1..=10);
            let b = rng.gen_range(-10..=10i64);
            (polynomial(&[(a, "x²"), (-b, "x")]), a * x * x - b * x)
        }
    };

    Problem::new(format!("Evaluate: {expr} when x = {x}"), value.to_string())
}

pub fn generate_distributive_property<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match tier {
        Tier::Beginner => {
            let a = rng.gen_range(2..=8i64);
            let b = rng.gen_range(1..=10i64);
            Problem::new(
                format!("Simplify: {a}(x + {b})"),
                polynomial(&[(a, "x"), (a * b, "")]),
            )
        }
        Tier::Intermediate => {
            let a = rng.gen_range(2..=8i64);
            let b = rng.gen_range(1..=10i64);
            Problem::new(
                format!("Simplify: {a}(x - {b})"),
                polynomial(&[(a, "x"), (-a * b, "")]),
            )
        }
        Tier::Advanced => {
            let a = nonzero_or(rng, -8..=8, 2..=8);
            let b = rng.gen_range(1..=10i64);
            let c = rng.gen_range(1..=10i64);
            Problem::new(
                format!("Simplify: {a}({})", polynomial(&[(b, "x"), (c, "")])),
                polynomial(&[(a * b, "x"), (a * c, "")]),
            )
        }
    }
}

pub fn generate_combine_like_terms<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match tier {
        Tier::Beginner => {
            let a = rng.gen_range(1..=10i64);
            let b = rng.gen_range(1..=10i64);
            let c = rng.gen_range(1..=10i64);
            Problem::new(
                format!("Simplify: {}", polynomial(&[(a, "x"), (b, "x"), (c, "")])),
                polynomial(&[(a + b, "x"), (c, "")]),
            )
        }
        Tier::Intermediate => {
            let a = rng.gen_range(1..=10i64);
            let b = rng.gen_range(1..=10i64);
            let c = rng.gen_range(1..=10i64);
            let d = rng.gen_range(1..=10i64);
            Problem::new(
                format!("Simplify: {}", polynomial(&[(a, "x"), (b, ""), (c, "x"), (-d, "")])),
                polynomial(&[(a + c, "x"), (b - d, "")]),
            )
        }
        Tier::Advanced => {
            let a = nonzero_or(rng, -10..=10, 1..=10);
            let b = rng.gen_range(-10..=10i64);
            let c = nonzero_or(rng, -10..=10, 1..=10);
            let d = rng.gen_range(-10..=10i64);
            Problem::new(
                format!("Simplify: {}", polynomial(&[(a, "x²"), (b, "x"), (c, "x²"), (-d, "x")])),
                polynomial(&[(a + c, "x²"), (b - d, "x")]),
            )
        }
    }
}
