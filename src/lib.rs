//! # prealgebra_drill_gen
//!
//! A fully offline, deterministic generator of pre-algebra practice sets.
//!
//! The library builds an ordered sequence of problems, 10,000 by default,
//! that climbs from plain arithmetic through fractions, expressions and
//! equations to exponents, linear functions, geometry and statistics. Every
//! problem comes with its answer, so the same run yields both a worksheet and
//! its answer key.
//!
//! ## How it works
//!
//! 1. Create a [`GenerationRequest`] with a count and an optional seed.
//! 2. Call [`generate_equation_set`]. For each position the engine looks up
//!    the active [`Stage`] of the [`Schedule`], draws a generator and a
//!    difficulty [`Tier`] from that stage's roster, and asks the generator for
//!    a problem. A draw that hits an arithmetic precondition (a zero divisor,
//!    say) is retried at the same position.
//! 3. The returned [`EquationSet`] holds numbered, index-aligned problem and
//!    answer lines plus per-record metadata, ready for [`render`].
//!
//! ## Key features
//!
//! - **Deterministic**: the same seed and count always give the same set.
//!   Without a seed one is drawn and reported on the result.
//! - **Exact answers**: decimals are carried as fixed-point values, so
//!   `0.1 + 0.2` prints `0.3` and money prints to the cent.
//! - **Staged difficulty**: fifteen stages, each with its own generator roster
//!   and weighted tier mix.
//!
//! ## Quick start
//!
//! ```rust
//! use prealgebra_drill_gen::{generate_equation_set, GenerationRequest};
//!
//! let set = generate_equation_set(GenerationRequest::new(10).with_seed(42)).unwrap();
//! assert_eq!(set.len(), 10);
//!
//! for (problem, answer) in set.problems().iter().zip(set.answers()) {
//!     println!("{problem}    [{answer}]");
//! }
//! ```

pub mod problem_engine;
pub mod render;

// Convenience re-exports so callers can use `prealgebra_drill_gen::generate_equation_set`
// directly without reaching into `problem_engine::`.
pub use problem_engine::{
    generate_equation_set, generate_problem, AssembleError, EquationSet, GenerateError,
    GenerationRequest, GeneratorKind, GeneratorSpec, Problem, ProblemRecord, Schedule,
    ScheduleError, Stage, Tier, Unit, DEFAULT_PROBLEM_COUNT, MAX_ATTEMPTS_PER_INDEX,
};

#[cfg(test)]
mod tests;
