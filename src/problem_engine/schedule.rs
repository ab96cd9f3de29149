//! Stage scheduler: which generators are eligible at each position.
//!
//! The standard table walks the syllabus in fifteen stages, from plain
//! arithmetic to a mixed review. Tier lists are multisets; `[T1, T1, T2]`
//! draws tier 1 two times in three.

use rand::Rng;
use tracing::info;

use crate::problem_engine::{
    error::ScheduleError,
    models::{GeneratorKind, GeneratorSpec, Stage, Tier, DEFAULT_PROBLEM_COUNT},
};

const T1: Tier = Tier::Beginner;
const T2: Tier = Tier::Intermediate;
const T3: Tier = Tier::Advanced;

/// A validated, ordered list of contiguous stages starting at position 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    stages: Vec<Stage>,
}

impl Schedule {
    /// Validate `stages` and wrap them.
    ///
    /// Stages must be non-empty, start at 0, abut each other exactly and each
    /// carry at least one generator with at least one tier.
    pub fn new(stages: Vec<Stage>) -> Result<Schedule, ScheduleError> {
        if stages.is_empty() {
            return Err(ScheduleError::NoStages);
        }

        let mut expected = 0;
        for stage in &stages {
            if stage.start_index != expected {
                return Err(ScheduleError::Discontiguous {
                    stage: stage.name.clone(),
                    expected,
                    found: stage.start_index,
                });
            }
            if stage.end_index <= stage.start_index {
                return Err(ScheduleError::EmptyRange {
                    stage: stage.name.clone(),
                    start: stage.start_index,
                    end: stage.end_index,
                });
            }
            if stage.generator_specs.is_empty() {
                return Err(ScheduleError::EmptyRoster { stage: stage.name.clone() });
            }
            if let Some(spec) = stage.generator_specs.iter().find(|s| s.allowed_tiers.is_empty()) {
                return Err(ScheduleError::EmptyTiers { stage: stage.name.clone(), kind: spec.kind });
            }
            expected = stage.end_index;
        }

        Ok(Schedule { stages })
    }

    /// The fifteen-stage progression covering `[0, 10000)`.
    pub fn standard() -> Result<Schedule, ScheduleError> {
        use GeneratorKind as K;

        let g = GeneratorSpec::new;
        let stages = vec![
            Stage::new("Basic arithmetic", 0, 500, vec![
                g(K::AdditionSubtraction, &[T1, T1, T2]),
                g(K::MultiplicationDivision, &[T1, T1, T2]),
                g(K::OrderOfOperations, &[T1, T1, T1]),
                g(K::AbsoluteValue, &[T1, T1, T1]),
            ]),
            Stage::new("Arithmetic and square roots", 500, 1200, vec![
                g(K::AdditionSubtraction, &[T2, T3, T3]),
                g(K::MultiplicationDivision, &[T2, T3, T3]),
                g(K::OrderOfOperations, &[T2, T2, T2]),
                g(K::SquareRoots, &[T1, T1, T2]),
            ]),
            Stage::new("Fractions introduction", 1200, 2000, vec![
                g(K::OrderOfOperations, &[T3, T3, T3]),
                g(K::SquareRoots, &[T2, T2, T3]),
                g(K::FractionAddition, &[T1, T1, T1]),
                g(K::FractionMultiplication, &[T1, T1, T1]),
                g(K::DecimalOperations, &[T1, T1, T2]),
            ]),
            Stage::new("Advanced fractions and decimals", 2000, 3000, vec![
                g(K::FractionAddition, &[T2, T2, T3]),
                g(K::FractionMultiplication, &[T2, T2, T3]),
                g(K::DecimalOperations, &[T2, T3, T3]),
            ]),
            Stage::new("Expressions and evaluation", 3000, 4000, vec![
                g(K::EvaluateExpression, &[T1, T1, T2]),
                g(K::DistributiveProperty, &[T1, T1, T2]),
                g(K::CombineLikeTerms, &[T1, T1, T2]),
            ]),
            Stage::new("Advanced expressions", 4000, 4800, vec![
                g(K::EvaluateExpression, &[T2, T2, T3]),
                g(K::DistributiveProperty, &[T2, T2, T3]),
                g(K::CombineLikeTerms, &[T2, T2, T3]),
            ]),
            Stage::new("One-step equations", 4800, 5600, vec![
                g(K::OneStepAddition, &[T1, T2, T2]),
                g(K::OneStepMultiplication, &[T1, T2, T2]),
            ]),
            Stage::new("Two-step equations", 5600, 6500, vec![
                g(K::OneStepAddition, &[T3, T3, T3]),
                g(K::OneStepMultiplication, &[T3, T3, T3]),
                g(K::TwoStepEquation, &[T1, T1, T2]),
            ]),
            Stage::new("Variables on both sides", 6500, 7200, vec![
                g(K::TwoStepEquation, &[T2, T3, T3]),
                g(K::VariablesBothSides, &[T1, T1, T2]),
            ]),
            Stage::new("Distribution in equations", 7200, 7800, vec![
                g(K::VariablesBothSides, &[T2, T2, T3]),
                g(K::DistributiveEquation, &[T1, T2, T2]),
                g(K::FractionEquation, &[T1, T1, T1]),
            ]),
            Stage::new("Ratios and proportions", 7800, 8400, vec![
                g(K::DistributiveEquation, &[T3, T3, T3]),
                g(K::FractionEquation, &[T2, T2, T3]),
                g(K::Ratio, &[T1, T2, T2]),
                g(K::Proportion, &[T1, T2, T2]),
                g(K::Percent, &[T1, T2, T2]),
            ]),
            Stage::new("Exponents", 8400, 9000, vec![
                g(K::SimpleInterest, &[T1, T2, T3]),
                g(K::ExponentBasics, &[T1, T2, T3]),
                g(K::ExponentProperties, &[T1, T2, T2]),
                g(K::NegativeExponents, &[T1, T2, T3]),
                g(K::ScientificNotation, &[T1, T1, T2]),
            ]),
            Stage::new("Linear functions", 9000, 9500, vec![
                g(K::ScientificNotation, &[T2, T3, T3]),
                g(K::CoordinatePlane, &[T1, T2, T3]),
                g(K::Slope, &[T1, T2, T3]),
                g(K::LinearEquation, &[T1, T2, T3]),
            ]),
            Stage::new("Geometry", 9500, 9800, vec![
                g(K::AngleRelationships, &[T1, T2, T3]),
                g(K::PerimeterArea, &[T1, T2, T3]),
                g(K::Circle, &[T1, T2, T3]),
                g(K::Pythagorean, &[T1, T2, T3]),
                g(K::Volume, &[T1, T2, T3]),
            ]),
            Stage::new("Final mixed review", 9800, DEFAULT_PROBLEM_COUNT, vec![
                g(K::MeanMedian, &[T1, T2, T3]),
                g(K::Probability, &[T1, T2, T3]),
                g(K::VariablesBothSides, &[T3, T3, T3]),
                g(K::DistributiveEquation, &[T3, T3, T3]),
                g(K::LinearEquation, &[T3, T3, T3]),
                g(K::Pythagorean, &[T3, T3, T3]),
            ]),
        ];
        Schedule::new(stages)
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Exclusive end of the last stage.
    pub fn end(&self) -> usize {
        self.stages.last().map_or(0, |s| s.end_index)
    }

    /// Stretch the final stage so the schedule covers `total` positions.
    pub fn covering(mut self, total: usize) -> Schedule {
        let end = self.end();
        if total > end {
            if let Some(last) = self.stages.last_mut() {
                info!(stage = %last.name, from = end, to = total, "extending final stage");
                last.end_index = total;
            }
        }
        self
    }

    /// The stage whose range contains the 0-based `position`.
    pub fn stage_for(&self, position: usize) -> Result<&Stage, ScheduleError> {
        let i = self.stages.partition_point(|s| s.end_index <= position);
        self.stages
            .get(i)
            .filter(|s| s.contains(position))
            .ok_or(ScheduleError::Uncovered { position })
    }

    /// Draw a generator uniformly from the stage covering `position`, then a
    /// tier uniformly from that generator's multiset.
    ///
    /// Rosters and tier lists were checked non-empty by [`Schedule::new`], so
    /// the only failure is a position past the end.
    pub fn pick<R: Rng>(&self, position: usize, rng: &mut R) -> Result<(GeneratorKind, Tier), ScheduleError> {
        let stage = self.stage_for(position)?;
        let spec = &stage.generator_specs[rng.gen_range(0..stage.generator_specs.len())];
        let tier = spec.allowed_tiers[rng.gen_range(0..spec.allowed_tiers.len())];
        Ok((spec.kind, tier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashMap;

    fn stage(name: &str, start: usize, end: usize) -> Stage {
        Stage::new(name, start, end, vec![GeneratorSpec::new(GeneratorKind::Slope, &[T1])])
    }

    #[test]
    fn standard_table_is_valid_and_ordered() {
        let schedule = Schedule::standard().unwrap();
        let stages = schedule.stages();
        assert_eq!(stages.len(), 15);
        assert_eq!(stages[0].name, "Basic arithmetic");
        assert_eq!(stages[14].name, "Final mixed review");
        assert_eq!(schedule.end(), DEFAULT_PROBLEM_COUNT);

        let bounds: Vec<usize> = stages.iter().map(|s| s.start_index).collect();
        assert_eq!(
            bounds,
            [0, 500, 1200, 2000, 3000, 4000, 4800, 5600, 6500, 7200, 7800, 8400, 9000, 9500, 9800]
        );
        assert!(stages.iter().all(|s| s.generator_specs.iter().all(|g| g.allowed_tiers.len() == 3)));
    }

    #[test]
    fn every_kind_is_scheduled_somewhere() {
        let schedule = Schedule::standard().unwrap();
        for kind in GeneratorKind::ALL {
            let scheduled = schedule
                .stages()
                .iter()
                .any(|s| s.generator_specs.iter().any(|g| g.kind == kind));
            assert!(scheduled, "{kind} never scheduled");
        }
    }

    #[test]
    fn stage_for_respects_exclusive_ends() {
        let schedule = Schedule::standard().unwrap();
        assert_eq!(schedule.stage_for(0).unwrap().name, "Basic arithmetic");
        assert_eq!(schedule.stage_for(499).unwrap().name, "Basic arithmetic");
        assert_eq!(schedule.stage_for(500).unwrap().name, "Arithmetic and square roots");
        assert_eq!(schedule.stage_for(9_999).unwrap().name, "Final mixed review");
        assert_eq!(
            schedule.stage_for(10_000),
            Err(ScheduleError::Uncovered { position: 10_000 })
        );
    }

    #[test]
    fn covering_extends_only_the_last_stage() {
        let schedule = Schedule::standard().unwrap().covering(12_345);
        assert_eq!(schedule.end(), 12_345);
        assert_eq!(schedule.stage_for(12_000).unwrap().name, "Final mixed review");
        assert_eq!(schedule.stages()[13].end_index, 9_800);

        let unchanged = Schedule::standard().unwrap().covering(10);
        assert_eq!(unchanged.end(), DEFAULT_PROBLEM_COUNT);
    }

    #[test]
    fn validation_rejects_malformed_tables() {
        assert_eq!(Schedule::new(vec![]), Err(ScheduleError::NoStages));

        let late_start = Schedule::new(vec![stage("a", 5, 10)]);
        assert!(matches!(late_start, Err(ScheduleError::Discontiguous { expected: 0, found: 5, .. })));

        let gap = Schedule::new(vec![stage("a", 0, 10), stage("b", 12, 20)]);
        assert!(matches!(gap, Err(ScheduleError::Discontiguous { expected: 10, found: 12, .. })));

        let overlap = Schedule::new(vec![stage("a", 0, 10), stage("b", 8, 20)]);
        assert!(matches!(overlap, Err(ScheduleError::Discontiguous { expected: 10, found: 8, .. })));

        let empty = Schedule::new(vec![stage("a", 0, 0)]);
        assert!(matches!(empty, Err(ScheduleError::EmptyRange { .. })));

        let no_roster = Schedule::new(vec![Stage::new("a", 0, 10, vec![])]);
        assert_eq!(no_roster, Err(ScheduleError::EmptyRoster { stage: "a".into() }));

        let no_tiers = Schedule::new(vec![Stage::new(
            "a",
            0,
            10,
            vec![GeneratorSpec::new(GeneratorKind::Ratio, &[])],
        )]);
        assert_eq!(
            no_tiers,
            Err(ScheduleError::EmptyTiers { stage: "a".into(), kind: GeneratorKind::Ratio })
        );
    }

    #[test]
    fn pick_weights_tiers_by_multiplicity() {
        let stage = Stage::new("w", 0, 1, vec![GeneratorSpec::new(GeneratorKind::Slope, &[T1, T1, T2])]);
        let schedule = Schedule::new(vec![stage]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut counts: HashMap<Tier, usize> = HashMap::new();
        for _ in 0..3_000 {
            let (kind, tier) = schedule.pick(0, &mut rng).unwrap();
            assert_eq!(kind, GeneratorKind::Slope);
            *counts.entry(tier).or_default() += 1;
        }
        assert!(!counts.contains_key(&T3));
        let ones = counts[&T1];
        // Expected 2000 of 3000; allow a wide band.
        assert!((1_800..=2_200).contains(&ones), "tier 1 drawn {ones} times");
    }

    #[test]
    fn pick_past_the_end_is_an_error() {
        let schedule = Schedule::new(vec![stage("a", 0, 10), stage("b", 10, 20)]).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(schedule.pick(19, &mut rng), Ok((GeneratorKind::Slope, T1)));
        assert_eq!(schedule.pick(20, &mut rng), Err(ScheduleError::Uncovered { position: 20 }));

        let stretched = schedule.covering(25);
        assert_eq!(stretched.pick(24, &mut rng), Ok((GeneratorKind::Slope, T1)));
    }
}
