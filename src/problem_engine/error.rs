//! Error types for problem generation.
//!
//! - [`GenerateError`]: a single generator call hit an arithmetic precondition.
//!   Transient; the assembler retries the same index with a fresh draw.
//! - [`ScheduleError`]: the stage table is malformed. Fatal at startup.
//! - [`AssembleError`]: everything that can stop a whole run.

use thiserror::Error;

use crate::problem_engine::models::GeneratorKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("division by zero")]
    ZeroDivisor,

    #[error("arithmetic overflow")]
    Overflow,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("schedule has no stages")]
    NoStages,

    #[error("stage '{stage}' starts at {found}, expected {expected}")]
    Discontiguous { stage: String, expected: usize, found: usize },

    #[error("stage '{stage}' has an empty range [{start}, {end})")]
    EmptyRange { stage: String, start: usize, end: usize },

    #[error("stage '{stage}' has no generators")]
    EmptyRoster { stage: String },

    #[error("stage '{stage}' lists {kind:?} with no tiers")]
    EmptyTiers { stage: String, kind: GeneratorKind },

    #[error("no stage covers position {position}")]
    Uncovered { position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssembleError {
    #[error("invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("problem {index} failed after {attempts} attempts (last error: {last})")]
    RetriesExhausted { index: usize, attempts: usize, last: GenerateError },
}
