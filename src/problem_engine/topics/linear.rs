//! Unit 7: coordinate plane, slope and slope-intercept form.
//!
//! Lines are printed through `polynomial`, so `y = 1x + 0` reads `y = x` and
//! a negative intercept reads `y = 2x - 3`.

use rand::Rng;

use crate::problem_engine::{
    arithmetic::{floor_div, format_fraction, Fixed},
    error::GenerateError,
    helpers::polynomial,
    models::{Problem, Tier},
};

fn quadrant(x: i64, y: i64) -> &'static str {
    match (x.signum(), y.signum()) {
        (1, 1)   => "Quadrant I",
        (-1, 1)  => "Quadrant II",
        (-1, -1) => "Quadrant III",
        (1, -1)  => "Quadrant IV",
        _        => "On an axis",
    }
}

pub fn generate_coordinate_plane<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    let x = rng.gen_range(-10..=10i64);
    let y = rng.gen_range(-10..=10i64);

    match tier {
        Tier::Beginner => {
            Problem::new(format!("What quadrant contains ({x}, {y})?"), quadrant(x, y))
        }
        Tier::Intermediate => {
            let x2 = rng.gen_range(-10..=10i64);
            Problem::new(
                format!("Find distance between ({x}, 0) and ({x2}, 0)"),
                (x - x2).abs().to_string(),
            )
        }
        Tier::Advanced => {
            // Vertical segment; the midpoint lands on a half at worst.
            let y2 = rng.gen_range(-10..=10i64);
            Problem::new(
                format!("Find midpoint of ({x}, {y}) and ({x}, {y2})"),
                format!("({x}, {})", Fixed::new((y + y2) * 5, 1)),
            )
        }
    }
}

pub fn generate_slope<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match tier {
        Tier::Beginner => {
            let x1 = rng.gen_range(-5..=5i64);
            let y1 = rng.gen_range(-5..=5i64);
            let m = rng.gen_range(1..=5i64);
            let run = rng.gen_range(1..=4i64);
            let (x2, y2) = (x1 + run, y1 + m * run);
            Problem::new(
                format!("Find slope between ({x1}, {y1}) and ({x2}, {y2})"),
                m.to_string(),
            )
        }
        Tier::Intermediate => {
            let x1 = rng.gen_range(-10..=10i64);
            let y1 = rng.gen_range(-10..=10i64);
            let mut x2 = rng.gen_range(-10..=10i64);
            let y2 = rng.gen_range(-10..=10i64);
            if x2 == x1 {
                x2 += rng.gen_range(1..=5);
            }
            Problem::new(
                format!("Find slope: ({x1}, {y1}) and ({x2}, {y2})"),
                format_fraction(y2 - y1, x2 - x1),
            )
        }
        Tier::Advanced => {
            let m = rng.gen_range(-5..=5i64);
            let b = rng.gen_range(-10..=10i64);
            Problem::new(
                format!("Find slope of y = {}", polynomial(&[(m, "x"), (b, "")])),
                m.to_string(),
            )
        }
    }
}

pub fn generate_linear_equation<R: Rng>(rng: &mut R, tier: Tier) -> Result<Problem, GenerateError> {
    let mut m = rng.gen_range(-5..=5i64);
    let b = rng.gen_range(-10..=10i64);

    let problem = match tier {
        Tier::Beginner => {
            let x = rng.gen_range(1..=10i64);
            let line = polynomial(&[(m, "x"), (b, "")]);
            Problem::new(format!("Find y when x = {x} in y = {line}"), (m * x + b).to_string())
        }
        Tier::Intermediate => {
            // Solve for x: pick a target y, then snap it onto the line.
            let target = rng.gen_range(-20..=20i64);
            if m == 0 {
                m = rng.gen_range(1..=5);
            }
            let x = floor_div(target - b, m)?;
            let y = m * x + b;
            let line = polynomial(&[(m, "x"), (b, "")]);
            Problem::new(format!("Find x when y = {y} in y = {line}"), x.to_string())
        }
        Tier::Advanced => {
            let x1 = rng.gen_range(-5..=5i64);
            let y1 = rng.gen_range(-5..=5i64);
            let m = rng.gen_range(1..=5i64);
            let b = y1 - m * x1;
            Problem::new(
                format!("Write equation: slope = {m}, passes through ({x1}, {y1})"),
                format!("y = {}", polynomial(&[(m, "x"), (b, "")])),
            )
        }
    };
    Ok(problem)
}
