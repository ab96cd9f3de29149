//! Topic generators grouped by syllabus unit.
//!
//! Each module contains all generators for one unit. Every public function
//! follows the same shape:
//!
//! ```ignore
//! pub fn generate_<name><R: Rng>(rng: &mut R, tier: Tier) -> Problem
//! ```
//!
//! Generators that divide by a drawn value or do decimal arithmetic return
//! `Result<Problem, GenerateError>` instead, so a bad draw is retried by the
//! assembler rather than panicking. `generator.rs` dispatches to these.

/// Addition/subtraction, multiplication/division, order of operations,
/// absolute value, square roots
pub mod fundamentals;
/// Fraction addition, fraction multiplication/division, decimal operations
pub mod fractions;
/// Evaluate expression, distributive property, combine like terms
pub mod expressions;
/// One-step, two-step, both sides, distributive and fraction equations
pub mod equations;
/// Ratio, proportion, percent, simple interest
pub mod ratios;
/// Exponent basics and properties, negative exponents, scientific notation
pub mod exponents;
/// Coordinate plane, slope, linear equations
pub mod linear;
/// Angles, perimeter/area, circles, Pythagorean theorem, volume
pub mod geometry;
/// Mean/median/range, probability
pub mod statistics;
