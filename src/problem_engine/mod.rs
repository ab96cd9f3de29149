//! Core problem engine: arithmetic, the generator catalog, the stage schedule
//! and the sequence assembler.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: tiers, generator kinds, stages, records, requests |
//! | `error`      | `GenerateError`, `ScheduleError`, `AssembleError` |
//! | `arithmetic` | GCD/LCM, floor division, fractions, exact fixed-point decimals |
//! | `helpers`    | Rendering helpers shared by topic generators (polynomials, money, lists) |
//! | `topics`     | 35 generators grouped in nine syllabus-unit modules |
//! | `generator`  | `generate_problem()`, dispatch from `GeneratorKind` to a topic generator |
//! | `schedule`   | The fifteen-stage progression, validation and weighted picking |
//! | `assembler`  | Single entry point `generate_equation_set()` with bounded retry |

pub mod arithmetic;
pub mod assembler;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod schedule;
pub mod topics;

pub use assembler::{generate_equation_set, MAX_ATTEMPTS_PER_INDEX};
pub use error::{AssembleError, GenerateError, ScheduleError};
pub use generator::generate_problem;
pub use models::{
    EquationSet, GenerationRequest, GeneratorKind, GeneratorSpec, Problem, ProblemRecord,
    Stage, Tier, Unit, DEFAULT_PROBLEM_COUNT,
};
pub use schedule::Schedule;
