use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::problem_engine::{
    error::{AssembleError, GenerateError},
    generator::generate_problem,
    models::{EquationSet, GenerationRequest, GeneratorKind, Problem, ProblemRecord, Tier},
    schedule::Schedule,
};

/// Attempts allowed at one index before the run is abandoned.
pub const MAX_ATTEMPTS_PER_INDEX: usize = 64;

/// Upper bound (inclusive) for seeds drawn when the request has none.
pub const MAX_DRAWN_SEED: u64 = 1_000_000;

/// Single entry point: build the full, numbered problem set for `request`.
///
/// An absent seed is drawn from entropy and reported on the result, so any
/// run can be reproduced.
pub fn generate_equation_set(request: GenerationRequest) -> Result<EquationSet, AssembleError> {
    let seed = request
        .seed
        .unwrap_or_else(|| StdRng::from_entropy().gen_range(0..=MAX_DRAWN_SEED));
    let schedule = Schedule::standard()?;
    assemble(&schedule, request.count, seed, generate_problem::<StdRng>)
}

/// Walk positions `0..count`, asking `schedule` for a generator and tier at
/// each one and calling `generate` until it succeeds.
///
/// A failed call is retried at the same index with a fresh draw from the
/// stage, so indices never skip.
pub(crate) fn assemble<F>(
    schedule: &Schedule,
    count: usize,
    seed: u64,
    mut generate: F,
) -> Result<EquationSet, AssembleError>
where
    F: FnMut(GeneratorKind, Tier, &mut StdRng) -> Result<Problem, GenerateError>,
{
    let schedule = schedule.clone().covering(count);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(count);
    let mut current_stage: Option<&str> = None;

    for position in 0..count {
        let index = position + 1;
        let stage = schedule.stage_for(position)?;
        if current_stage != Some(stage.name.as_str()) {
            info!(stage = %stage.name, start = index, "entering stage");
            current_stage = Some(stage.name.as_str());
        }

        let mut attempt = 0;
        let record = loop {
            attempt += 1;
            let (kind, tier) = schedule.pick(position, &mut rng)?;
            match generate(kind, tier, &mut rng) {
                Ok(problem) => {
                    break ProblemRecord {
                        index,
                        problem_text: problem.text,
                        answer_text: problem.answer,
                        kind,
                        tier,
                        stage: stage.name.clone(),
                    };
                }
                Err(err) if attempt < MAX_ATTEMPTS_PER_INDEX => {
                    debug!(index, attempt, %kind, %tier, error = %err, "generator failed, retrying");
                }
                Err(err) => {
                    return Err(AssembleError::RetriesExhausted { index, attempts: attempt, last: err });
                }
            }
        };
        records.push(record);
    }

    info!(seed, count = records.len(), "equation set assembled");
    Ok(EquationSet { seed, records })
}
