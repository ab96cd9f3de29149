//! Unit 6: exponents and scientific notation.

use rand::Rng;

use crate::problem_engine::{
    arithmetic::Fixed,
    helpers::{nonzero_or, power},
    models::{Problem, Tier},
};

pub fn generate_exponent_basics<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match tier {
        Tier::Beginner => {
            let base = rng.gen_range(2..=10i64);
            let exp = rng.gen_range(2..=4u32);
            Problem::new(format!("{base}^{exp}"), base.pow(exp).to_string())
        }
        Tier::Intermediate => {
            let base = nonzero_or(rng, -5..=5, 2..=8);
            let exp = rng.gen_range(2..=3u32);
            Problem::new(format!("({base})^{exp}"), base.pow(exp).to_string())
        }
        Tier::Advanced => {
            let base = rng.gen_range(2..=8i64);
            let e1 = rng.gen_range(2..=3u32);
            let e2 = rng.gen_range(2..=3u32);
            Problem::new(format!("{base}^{e1} × {base}^{e2}"), base.pow(e1 + e2).to_string())
        }
    }
}

pub fn generate_exponent_properties<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match tier {
        Tier::Beginner => {
            // Quotient rule; keep the result exponent positive.
            let mut e1 = rng.gen_range(3..=8u32);
            let mut e2 = rng.gen_range(2..=5u32);
            if e1 <= e2 {
                (e1, e2) = (e2 + 1, e1);
            }
            Problem::new(format!("Simplify: x^{e1} ÷ x^{e2}"), power("x", e1 - e2))
        }
        Tier::Intermediate => {
            let e1 = rng.gen_range(2..=5u32);
            let e2 = rng.gen_range(2..=4u32);
            Problem::new(format!("Simplify: (x^{e1})^{e2}"), power("x", e1 * e2))
        }
        Tier::Advanced => {
            let e = rng.gen_range(2..=6u32);
            Problem::new(
                format!("Simplify: (xy)^{e}"),
                format!("{}{}", power("x", e), power("y", e)),
            )
        }
    }
}

pub fn generate_negative_exponents<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    let base = rng.gen_range(2..=10i64);

    match tier {
        Tier::Beginner => Problem::new(format!("{base}^0"), "1"),
        Tier::Intermediate => {
            let exp = rng.gen_range(1..=4u32);
            Problem::new(format!("{base}^(-{exp})"), format!("1/{}", base.pow(exp)))
        }
        Tier::Advanced => {
            let exp = rng.gen_range(2..=4u32);
            Problem::new(format!("Simplify: x^(-{exp})"), format!("1/{}", power("x", exp)))
        }
    }
}

pub fn generate_scientific_notation<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match tier {
        Tier::Beginner => {
            let coef_tenths = rng.gen_range(10..=99i64);
            let exp = rng.gen_range(1..=6u32);
            Problem::new(
                format!("Write in standard form: {} × 10^{exp}", Fixed::new(coef_tenths, 1)),
                (coef_tenths * 10i64.pow(exp - 1)).to_string(),
            )
        }
        Tier::Intermediate => {
            let num = rng.gen_range(1_000..=999_999i64);
            let exp = num.to_string().len() as u32 - 1;
            Problem::new(
                format!("Write in scientific notation: {num}"),
                format!("{} × 10^{exp}", Fixed::new(num, exp)),
            )
        }
        Tier::Advanced => {
            let c1 = rng.gen_range(10..=90i64);
            let c2 = rng.gen_range(10..=90i64);
            let e1 = rng.gen_range(2..=5u32);
            let e2 = rng.gen_range(2..=5u32);
            // Product of two tenths is in hundredths; renormalize past 10.
            let product = c1 * c2;
            let (coef, exp) = if product >= 1_000 {
                (Fixed::new(product, 3), e1 + e2 + 1)
            } else {
                (Fixed::new(product, 2), e1 + e2)
            };
            Problem::new(
                format!(
                    "Multiply: ({} × 10^{e1})({} × 10^{e2})",
                    Fixed::new(c1, 1),
                    Fixed::new(c2, 1)
                ),
                format!("{coef} × 10^{exp}"),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem_engine::topics::testing::{decimal, decimals, ints, rng, SEEDS};

    fn scaled(coef: Fixed, exp: i64) -> Fixed {
        coef * Fixed::from_int(10i64.pow(exp as u32))
    }

    /// Coefficient and exponent of a `c × 10^k` answer.
    fn sci(answer: &str) -> (Fixed, i64) {
        let (coef, exp) = answer.split_once(" × 10^").unwrap();
        (decimal(coef), exp.parse().unwrap())
    }

    fn assert_normalized(coef: Fixed) {
        assert!(coef.units() > 0);
        let whole = coef.units() / 10i64.pow(coef.scale());
        assert!((1..10).contains(&whole), "coefficient {coef} not in [1, 10)");
    }

    #[test]
    fn exponent_basics_answers_recompute() {
        for seed in SEEDS {
            for tier in Tier::ALL {
                let p = generate_exponent_basics(&mut rng(seed), tier);
                let n = ints(&p.text);
                let expected = match tier {
                    Tier::Advanced => n[0].pow((n[1] + n[3]) as u32),
                    _ => n[0].pow(n[1] as u32),
                };
                assert_eq!(p.answer, expected.to_string(), "{p:?}");
            }
        }
    }

    #[test]
    fn exponent_properties_answers_recompute() {
        for seed in SEEDS {
            for tier in Tier::ALL {
                let p = generate_exponent_properties(&mut rng(seed), tier);
                let n = ints(&p.text);
                let expected = match tier {
                    Tier::Beginner => {
                        assert!(n[0] > n[1], "{}", p.text);
                        power("x", (n[0] - n[1]) as u32)
                    }
                    Tier::Intermediate => power("x", (n[0] * n[1]) as u32),
                    Tier::Advanced => format!("x^{0}y^{0}", n[0]),
                };
                assert_eq!(p.answer, expected, "{p:?}");
            }
        }
    }

    #[test]
    fn negative_exponents_answers_recompute() {
        for seed in SEEDS {
            for tier in Tier::ALL {
                let p = generate_negative_exponents(&mut rng(seed), tier);
                let n = ints(&p.text);
                let expected = match tier {
                    Tier::Beginner => "1".to_string(),
                    Tier::Intermediate => format!("1/{}", n[0].pow((-n[1]) as u32)),
                    Tier::Advanced => format!("1/x^{}", -n[0]),
                };
                assert_eq!(p.answer, expected, "{p:?}");
            }
        }
    }

    #[test]
    fn scientific_notation_answers_recompute() {
        for seed in SEEDS {
            let p = generate_scientific_notation(&mut rng(seed), Tier::Beginner);
            let d = decimals(&p.text);
            let exp = d[2].units();
            assert_eq!(decimal(&p.answer), scaled(d[0], exp), "{p:?}");

            let p = generate_scientific_notation(&mut rng(seed), Tier::Intermediate);
            let num = ints(&p.text)[0];
            let (coef, exp) = sci(&p.answer);
            assert_normalized(coef);
            assert_eq!(scaled(coef, exp), Fixed::from_int(num), "{p:?}");

            let p = generate_scientific_notation(&mut rng(seed), Tier::Advanced);
            let d = decimals(&p.text);
            let (coef, exp) = sci(&p.answer);
            assert_normalized(coef);
            let expected = scaled(d[0] * d[3], d[2].units() + d[5].units());
            assert_eq!(scaled(coef, exp), expected, "{p:?}");
        }
    }
}
