//! Unit tests for the `prealgebra_drill_gen` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical output; different seeds → varied output |
//! | Structural | Exact length, indices `1..=N`, `"<index>. "` prefixes, aligned answers |
//! | Staging | Seed 42 / count 10 stays in the first stage; stage order follows the table |
//! | Coverage | Every stage's generator/tier combination appears over a full run |
//! | Edge cases | No zero divisors; counts past the table extend the final stage |
//! | Rendering | Full set renders to the expected page count with both titles |

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::problem_engine::{
    generate_equation_set, EquationSet, GenerationRequest, GeneratorKind, Schedule, Tier,
    DEFAULT_PROBLEM_COUNT,
};
use crate::render::Document;

// ── helpers ──────────────────────────────────────────────────────────────────

fn seeded(count: usize, seed: u64) -> EquationSet {
    generate_equation_set(GenerationRequest::new(count).with_seed(seed)).unwrap()
}

/// Seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_gives_identical_sets() {
    for seed in SEEDS {
        let a = seeded(2_000, seed);
        let b = seeded(2_000, seed);
        assert_eq!(a.problems(), b.problems(), "seed {seed}");
        assert_eq!(a.answers(), b.answers(), "seed {seed}");
        assert_eq!(a.seed, seed);
    }
}

#[test]
fn different_seeds_vary() {
    let first = seeded(50, SEEDS[0]).problems();
    let varied = SEEDS[1..].iter().any(|&s| seeded(50, s).problems() != first);
    assert!(varied, "all seeds produced the same 50 problems");
}

#[test]
fn shorter_run_is_prefix_of_longer_run() {
    let short = seeded(300, 42);
    let long = seeded(900, 42);
    assert_eq!(short.problems(), long.problems()[..300].to_vec());
}

// ── structure ────────────────────────────────────────────────────────────────

#[test]
fn full_default_set_is_complete_and_numbered() {
    let set = seeded(DEFAULT_PROBLEM_COUNT, 2024);
    assert_eq!(set.len(), DEFAULT_PROBLEM_COUNT);

    let problems = set.problems();
    let answers = set.answers();
    assert_eq!(problems.len(), answers.len());

    for (i, (p, a)) in problems.iter().zip(&answers).enumerate() {
        let prefix = format!("{}. ", i + 1);
        assert!(p.starts_with(&prefix), "bad problem line {p}");
        assert!(a.starts_with(&prefix), "bad answer line {a}");
        assert!(p.len() > prefix.len() && a.len() > prefix.len(), "empty text at {}", i + 1);
        assert!(!p.contains('\n') && !a.contains('\n'));
    }
}

#[test]
fn small_counts_are_exact() {
    for count in [1, 2, 10, 499, 500, 501] {
        let set = seeded(count, 3);
        assert_eq!(set.len(), count);
        assert_eq!(set.records.last().map(|r| r.index), Some(count));
    }
}

// ── staging ──────────────────────────────────────────────────────────────────

#[test]
fn seed_42_count_10_stays_in_basic_arithmetic() {
    let set = seeded(10, 42);
    let schedule = Schedule::standard().unwrap();
    let first = &schedule.stages()[0];
    for record in &set.records {
        assert_eq!(record.stage, "Basic arithmetic");
        let spec = first
            .generator_specs
            .iter()
            .find(|g| g.kind == record.kind)
            .unwrap_or_else(|| panic!("{} not in the first stage", record.kind));
        assert!(spec.allowed_tiers.contains(&record.tier), "{} at {}", record.kind, record.tier);
    }
    assert_eq!(set.problems(), seeded(10, 42).problems());
}

#[test]
fn stages_appear_in_table_order() {
    let set = seeded(DEFAULT_PROBLEM_COUNT, 5);
    let schedule = Schedule::standard().unwrap();
    for stage in schedule.stages() {
        for record in &set.records[stage.start_index..stage.end_index] {
            assert_eq!(record.stage, stage.name, "record {}", record.index);
        }
    }
}

#[test]
fn every_stage_combination_is_exercised() {
    let schedule = Schedule::standard().unwrap();
    let mut seen: HashSet<(String, GeneratorKind, Tier)> = HashSet::new();
    for seed in [1, 2] {
        for r in seeded(DEFAULT_PROBLEM_COUNT, seed).records {
            seen.insert((r.stage, r.kind, r.tier));
        }
    }

    for stage in schedule.stages() {
        for spec in &stage.generator_specs {
            for &tier in &spec.allowed_tiers {
                assert!(
                    seen.contains(&(stage.name.clone(), spec.kind, tier)),
                    "{} never drew {} at {}",
                    stage.name,
                    spec.kind,
                    tier
                );
            }
        }
    }
}

// ── edge cases ───────────────────────────────────────────────────────────────

#[test]
fn division_never_shows_zero_divisor() {
    for seed in SEEDS {
        let set = seeded(1_200, seed);
        for r in set.records.iter().filter(|r| r.kind == GeneratorKind::MultiplicationDivision) {
            assert!(!r.problem_text.contains("÷ 0"), "{}", r.problem_text);
            assert!(!r.problem_text.contains("÷ (0"), "{}", r.problem_text);
        }
    }
}

#[test]
fn counts_past_the_table_use_the_final_stage() {
    let set = seeded(DEFAULT_PROBLEM_COUNT + 250, 8);
    assert_eq!(set.len(), DEFAULT_PROBLEM_COUNT + 250);
    assert!(set.records[DEFAULT_PROBLEM_COUNT..]
        .iter()
        .all(|r| r.stage == "Final mixed review"));
}

// ── rendering ────────────────────────────────────────────────────────────────

#[test]
fn full_set_renders_two_hundred_pages() {
    let set = seeded(DEFAULT_PROBLEM_COUNT, 42);
    let at = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap().and_hms_opt(9, 5, 0).unwrap();

    let problems = Document::problems(&set, &at, 50);
    let answers = Document::answers(&set, &at, 50);
    assert_eq!(problems.title, "10,000 Pre-Algebra Practice Equations");
    assert_eq!(answers.title, "Answer Key - 10,000 Pre-Algebra Equations");
    assert_eq!(problems.pages.len(), 200);
    assert_eq!(answers.pages.len(), 200);

    let text = answers.render();
    assert!(text.starts_with("Answer Key - 10,000 Pre-Algebra Equations\nGenerated on January 02, 2025 at 09:05 AM\n"));
    assert!(text.ends_with("Page 200 of 200\n"));
}
