//! Unit 8: angles, perimeter and area, circles, right triangles and volume.
//!
//! π is taken as 3.14 and carried as hundredths, so circle and cylinder
//! answers are exact two-place decimals rather than rounded floats.

use rand::Rng;

use crate::problem_engine::{
    arithmetic::Fixed,
    helpers::pick,
    models::{Problem, Tier},
};

/// 3.14 in hundredths.
const PI_HUNDREDTHS: i64 = 314;

const TRIPLES: [(i64, i64, i64); 4] = [(3, 4, 5), (5, 12, 13), (8, 15, 17), (7, 24, 25)];

pub fn generate_angle_relationships<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match tier {
        Tier::Beginner => {
            let angle = rng.gen_range(10..=80i64);
            Problem::new(format!("Find complement of {angle}°"), format!("{}°", 90 - angle))
        }
        Tier::Intermediate => {
            let angle = rng.gen_range(10..=170i64);
            Problem::new(format!("Find supplement of {angle}°"), format!("{}°", 180 - angle))
        }
        Tier::Advanced => {
            let angle = rng.gen_range(30..=150i64);
            Problem::new(
                format!("If two vertical angles are equal and one is {angle}°, find the other"),
                format!("{angle}°"),
            )
        }
    }
}

pub fn generate_perimeter_area<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match tier {
        Tier::Beginner => {
            let length = rng.gen_range(5..=20i64);
            let width = rng.gen_range(3..=15i64);
            Problem::new(
                format!("Find area of rectangle: length = {length}, width = {width}"),
                (length * width).to_string(),
            )
        }
        Tier::Intermediate => {
            let side = rng.gen_range(5..=20i64);
            Problem::new(format!("Find perimeter of square with side {side}"), (4 * side).to_string())
        }
        Tier::Advanced => {
            let base = rng.gen_range(5..=20i64);
            let height = rng.gen_range(4..=15i64);
            Problem::new(
                format!("Find area of triangle: base = {base}, height = {height}"),
                Fixed::new(base * height * 5, 1).to_string(),
            )
        }
    }
}

pub fn generate_circle<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    let radius = rng.gen_range(3..=15i64);
    let area = Fixed::new(PI_HUNDREDTHS * radius * radius, 2);

    match tier {
        Tier::Beginner => Problem::new(
            format!("Find circumference: radius = {radius} (use π ≈ 3.14)"),
            Fixed::new(2 * PI_HUNDREDTHS * radius, 2).to_string(),
        ),
        Tier::Intermediate => Problem::new(
            format!("Find area of circle: radius = {radius} (use π ≈ 3.14)"),
            area.to_string(),
        ),
        Tier::Advanced => Problem::new(
            format!("Find area: diameter = {} (use π ≈ 3.14)", radius * 2),
            area.to_string(),
        ),
    }
}

pub fn generate_pythagorean<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match tier {
        Tier::Beginner => {
            let (a, b, c) = pick(rng, &TRIPLES[..2]);
            Problem::new(format!("Find c: a = {a}, b = {b} (a² + b² = c²)"), c.to_string())
        }
        Tier::Intermediate => {
            let (a, b, c) = pick(rng, &TRIPLES);
            Problem::new(format!("Find hypotenuse: legs are {a} and {b}"), c.to_string())
        }
        Tier::Advanced => {
            let (a, b, c) = pick(rng, &TRIPLES);
            Problem::new(format!("Find leg: hypotenuse = {c}, other leg = {a}"), b.to_string())
        }
    }
}

pub fn generate_volume<R: Rng>(rng: &mut R, tier: Tier) -> Problem {
    match tier {
        Tier::Beginner => {
            let l = rng.gen_range(3..=10i64);
            let w = rng.gen_range(3..=10i64);
            let h = rng.gen_range(3..=10i64);
            Problem::new(
                format!("Find volume of rectangular prism: l={l}, w={w}, h={h}"),
                (l * w * h).to_string(),
            )
        }
        Tier::Intermediate => {
            let r = rng.gen_range(2..=8i64);
            let h = rng.gen_range(5..=15i64);
            Problem::new(
                format!("Find volume of cylinder: r={r}, h={h} (V=πr²h, π≈3.14)"),
                Fixed::new(PI_HUNDREDTHS * r * r * h, 2).to_string(),
            )
        }
        Tier::Advanced => {
            let s = rng.gen_range(3..=12i64);
            Problem::new(format!("Find volume of cube: side = {s}"), s.pow(3).to_string())
        }
    }
}
