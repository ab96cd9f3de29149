//! Unit 9: data and probability.

use rand::Rng;

use crate::problem_engine::{
    arithmetic::{format_fraction, Fixed},
    error::GenerateError,
    helpers::list,
    models::{Problem, Tier},
};

fn sample<R: Rng>(rng: &mut R, n: usize, hi: i64) -> Vec<i64> {
    (0..n).map(|_| rng.gen_range(1..=hi)).collect()
}

pub fn generate_mean_median<R: Rng>(rng: &mut R, tier: Tier) -> Result<Problem, GenerateError> {
    let problem = match tier {
        Tier::Beginner => {
            let data = sample(rng, 5, 20);
            let sum: i64 = data.iter().sum();
            // Five values: the mean is always exact to one place.
            let mean = Fixed::ratio(sum, data.len() as i64, 1)?;
            Problem::new(format!("Find mean: {}", list(&data)), mean.to_string())
        }
        Tier::Intermediate => {
            let mut data = sample(rng, 7, 30);
            data.sort_unstable();
            let median = data[data.len() / 2];
            Problem::new(format!("Find median: {}", list(&data)), median.to_string())
        }
        Tier::Advanced => {
            let data = sample(rng, 10, 50);
            let (lo, hi) = data
                .iter()
                .fold((i64::MAX, i64::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
            Problem::new(format!("Find range: {}", list(&data)), (hi - lo).to_string())
        }
    };
    Ok(problem)
}

pub fn generate_probability<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match tier {
        Tier::Beginner => {
            let favorable = rng.gen_range(1..=5i64);
            let total = rng.gen_range(favorable + 1..=12);
            Problem::new(
                format!("Probability: {favorable} favorable outcomes out of {total} total"),
                format_fraction(favorable, total),
            )
        }
        Tier::Intermediate => Problem::new("Probability of getting heads on a fair coin", "1/2"),
        Tier::Advanced => {
            let outcomes = rng.gen_range(1..=6i64);
            Problem::new(
                format!("Probability of rolling ≤ {outcomes} on standard die"),
                format_fraction(outcomes, 6),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem_engine::topics::testing::{decimal, ints, rng, SEEDS};

    #[test]
    fn mean_median_range_recompute() {
        for seed in SEEDS {
            for tier in Tier::ALL {
                let p = generate_mean_median(&mut rng(seed), tier).unwrap();
                let data = ints(&p.text);
                match tier {
                    Tier::Beginner => {
                        assert_eq!(data.len(), 5);
                        let sum: i64 = data.iter().sum();
                        assert_eq!(decimal(&p.answer) * Fixed::from_int(5), Fixed::from_int(sum), "{p:?}");
                    }
                    Tier::Intermediate => {
                        assert_eq!(data.len(), 7);
                        assert!(data.windows(2).all(|w| w[0] <= w[1]), "unsorted: {}", p.text);
                        assert_eq!(p.answer, data[3].to_string(), "{p:?}");
                    }
                    Tier::Advanced => {
                        assert_eq!(data.len(), 10);
                        let spread = data.iter().max().unwrap() - data.iter().min().unwrap();
                        assert_eq!(p.answer, spread.to_string(), "{p:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn mean_has_no_float_noise() {
        assert_eq!(Fixed::ratio(52, 5, 1).unwrap().to_string(), "10.4");
        assert_eq!(Fixed::ratio(50, 5, 1).unwrap().to_string(), "10");
    }

    #[test]
    fn probabilities_are_reduced_and_proper() {
        for seed in SEEDS {
            for tier in Tier::ALL {
                let p = generate_probability(&mut rng(seed), tier);
                let expected = match tier {
                    Tier::Beginner => {
                        let n = ints(&p.text);
                        assert!(n[0] < n[1], "{}", p.text);
                        format_fraction(n[0], n[1])
                    }
                    Tier::Intermediate => "1/2".to_string(),
                    Tier::Advanced => format_fraction(ints(&p.text)[0], 6),
                };
                assert_eq!(p.answer, expected, "{p:?}");
            }
        }
    }
}
