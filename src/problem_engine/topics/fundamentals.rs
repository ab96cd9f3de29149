//! Unit 1: fundamentals of real numbers.
//!
//! - **Addition & subtraction**: two positive terms, then a negative first
//!   term, then three signed terms.
//! - **Multiplication & division**: times tables, exact division built from a
//!   product (so the divisor is never zero), then signed products.
//! - **Order of operations**: `a + b × c`, a parenthesized sum, then a square.
//! - **Absolute value**: single value, sum of two, absolute difference.
//! - **Square roots**: perfect squares up to 81, up to 225, then a sum of two.

use rand::Rng;

use crate::problem_engine::{
    helpers::operand,
    models::{Problem, Tier},
};

pub fn generate_addition_subtraction<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match tier {
        Tier::Beginner => {
            let a = rng.gen_range(1..=20i64);
            let b = rng.gen_range(1..=20i64);
            Problem::new(format!("{a} + {b}"), (a + b).to_string())
        }
        Tier::Intermediate => {
            let a = rng.gen_range(-20..=20i64);
            let b = rng.gen_range(1..=20i64);
            Problem::new(format!("{a} + {b}"), (a + b).to_string())
        }
        Tier::Advanced => {
            let a = rng.gen_range(-50..=50i64);
            let b = rng.gen_range(-50..=50i64);
            let c = rng.gen_range(-50..=50i64);
            Problem::new(
                format!("{a} + {} - {}", operand(b), operand(c)),
                (a + b - c).to_string(),
            )
        }
    }
}

pub fn generate_multiplication_division<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match tier {
        Tier::Beginner => {
            let a = rng.gen_range(2..=12i64);
            let b = rng.gen_range(2..=12i64);
            Problem::new(format!("{a} × {b}"), (a * b).to_string())
        }
        Tier::Intermediate => {
            // Dividend is built from the quotient, so the division is exact.
            let divisor = rng.gen_range(2..=12i64);
            let quotient = rng.gen_range(2..=12i64);
            Problem::new(format!("{} ÷ {divisor}", divisor * quotient), quotient.to_string())
        }
        Tier::Advanced => {
            let a = rng.gen_range(-12..=12i64);
            let mut b = rng.gen_range(-12..=12i64);
            if b == 0 {
                b = rng.gen_range(1..=12);
            }
            Problem::new(format!("{a} × {}", operand(b)), (a * b).to_string())
        }
    }
}

pub fn generate_order_of_operations<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match tier {
        Tier::Beginner => {
            let a = rng.gen_range(1..=10i64);
            let b = rng.gen_range(1..=10i64);
            let c = rng.gen_range(1..=10i64);
            Problem::new(format!("{a} + {b} × {c}"), (a + b * c).to_string())
        }
        Tier::Intermediate => {
            let a = rng.gen_range(1..=10i64);
            let b = rng.gen_range(1..=10i64);
            let c = rng.gen_range(1..=10i64);
            Problem::new(format!("({a} + {b}) × {c}"), ((a + b) * c).to_string())
        }
        Tier::Advanced => {
            let a = rng.gen_range(2..=10i64);
            let b = rng.gen_range(1..=10i64);
            let c = rng.gen_range(1..=5i64);
            let d = rng.gen_range(1..=10i64);
            Problem::new(format!("{a}² + {b} × {c} - {d}"), (a * a + b * c - d).to_string())
        }
    }
}

pub fn generate_absolute_value<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match tier {
        Tier::Beginner => {
            let a = rng.gen_range(-20..=20i64);
            Problem::new(format!("|{a}|"), a.abs().to_string())
        }
        Tier::Intermediate => {
            let a = rng.gen_range(-20..=20i64);
            let b = rng.gen_range(-20..=20i64);
            Problem::new(format!("|{a}| + |{b}|"), (a.abs() + b.abs()).to_string())
        }
        Tier::Advanced => {
            let a = rng.gen_range(-20..=20i64);
            let b = rng.gen_range(-20..=20i64);
            Problem::new(format!("|{a} - {}|", operand(b)), (a - b).abs().to_string())
        }
    }
}

pub fn generate_square_roots<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match tier {
        Tier::Beginner => {
            let root = rng.gen_range(1..=9i64);
            Problem::new(format!("√{}", root * root), root.to_string())
        }
        Tier::Intermediate => {
            let root = rng.gen_range(1..=15i64);
            Problem::new(format!("√{}", root * root), root.to_string())
        }
        Tier::Advanced => {
            let r1 = rng.gen_range(1..=9i64);
            let r2 = rng.gen_range(1..=9i64);
            Problem::new(format!("√{} + √{}", r1 * r1, r2 * r2), (r1 + r2).to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem_engine::topics::testing::{ints, rng, SEEDS};

    fn answer(p: &Problem) -> i64 {
        p.answer.parse().unwrap()
    }

    fn isqrt(n: i64) -> i64 {
        let r = (n as f64).sqrt().round() as i64;
        assert_eq!(r * r, n, "{n} is not a perfect square");
        r
    }

    #[test]
    fn addition_subtraction_answers_recompute() {
        for seed in SEEDS {
            for tier in Tier::ALL {
                let p = generate_addition_subtraction(&mut rng(seed), tier);
                let n = ints(&p.text);
                let expected = match tier {
                    Tier::Advanced => n[0] + n[1] - n[2],
                    _ => n[0] + n[1],
                };
                assert_eq!(answer(&p), expected, "{p:?}");
            }
        }
    }

    #[test]
    fn addition_advanced_never_shows_double_signs() {
        for seed in SEEDS {
            let p = generate_addition_subtraction(&mut rng(seed), Tier::Advanced);
            assert!(!p.text.contains("+ -") && !p.text.contains("- -"), "{}", p.text);
        }
    }

    #[test]
    fn multiplication_division_answers_recompute() {
        for seed in SEEDS {
            for tier in Tier::ALL {
                let p = generate_multiplication_division(&mut rng(seed), tier);
                let n = ints(&p.text);
                if p.text.contains('÷') {
                    assert_ne!(n[1], 0, "zero divisor in {}", p.text);
                    assert_eq!(n[0] % n[1], 0, "inexact division in {}", p.text);
                    assert_eq!(answer(&p), n[0] / n[1]);
                } else {
                    assert_eq!(answer(&p), n[0] * n[1], "{p:?}");
                }
            }
        }
    }

    #[test]
    fn multiplication_division_never_divides_by_zero() {
        for seed in 0..2_000u64 {
            for tier in Tier::ALL {
                let p = generate_multiplication_division(&mut rng(seed), tier);
                assert!(!p.text.contains("÷ 0"), "zero divisor in {}", p.text);
            }
        }
    }

    #[test]
    fn order_of_operations_answers_recompute() {
        for seed in SEEDS {
            for tier in Tier::ALL {
                let p = generate_order_of_operations(&mut rng(seed), tier);
                let n = ints(&p.text);
                let expected = match tier {
                    Tier::Beginner => n[0] + n[1] * n[2],
                    Tier::Intermediate => (n[0] + n[1]) * n[2],
                    Tier::Advanced => n[0] * n[0] + n[1] * n[2] - n[3],
                };
                assert_eq!(answer(&p), expected, "{p:?}");
            }
        }
    }

    #[test]
    fn absolute_value_answers_recompute() {
        for seed in SEEDS {
            for tier in Tier::ALL {
                let p = generate_absolute_value(&mut rng(seed), tier);
                let n = ints(&p.text);
                let expected = match tier {
                    Tier::Beginner => n[0].abs(),
                    Tier::Intermediate => n[0].abs() + n[1].abs(),
                    Tier::Advanced => (n[0] - n[1]).abs(),
                };
                assert_eq!(answer(&p), expected, "{p:?}");
            }
        }
    }

    #[test]
    fn square_roots_answers_recompute() {
        for seed in SEEDS {
            for tier in Tier::ALL {
                let p = generate_square_roots(&mut rng(seed), tier);
                let expected: i64 = ints(&p.text).into_iter().map(isqrt).sum();
                assert_eq!(answer(&p), expected, "{p:?}");
            }
        }
    }
}
