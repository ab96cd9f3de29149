use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Difficulty tier 1..=3 within a single generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Beginner, Tier::Intermediate, Tier::Advanced];

    pub fn level(self) -> u8 {
        match self {
            Tier::Beginner     => 1,
            Tier::Intermediate => 2,
            Tier::Advanced     => 3,
        }
    }

    pub fn from_level(level: u8) -> Option<Tier> {
        match level {
            1 => Some(Tier::Beginner),
            2 => Some(Tier::Intermediate),
            3 => Some(Tier::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tier {}", self.level())
    }
}

// ---------------------------------------------------------------------------
// Catalog identifiers
// ---------------------------------------------------------------------------

/// Syllabus unit a generator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Fundamentals,
    FractionsAndDecimals,
    Expressions,
    Equations,
    RatiosAndPercents,
    Exponents,
    LinearFunctions,
    Geometry,
    DataAndProbability,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Unit::Fundamentals         => "Fundamentals of Real Numbers",
            Unit::FractionsAndDecimals => "Fractions and Decimals",
            Unit::Expressions          => "Expressions and Properties",
            Unit::Equations            => "Solving Equations",
            Unit::RatiosAndPercents    => "Ratios, Proportions, and Percentages",
            Unit::Exponents            => "Exponents",
            Unit::LinearFunctions      => "Linear Functions",
            Unit::Geometry             => "Geometry",
            Unit::DataAndProbability   => "Data and Probability",
        };
        write!(f, "{}", s)
    }
}

/// Stable identifier for every generator in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneratorKind {
    AdditionSubtraction,
    MultiplicationDivision,
    OrderOfOperations,
    AbsoluteValue,
    SquareRoots,
    FractionAddition,
    FractionMultiplication,
    DecimalOperations,
    EvaluateExpression,
    DistributiveProperty,
    CombineLikeTerms,
    OneStepAddition,
    OneStepMultiplication,
    TwoStepEquation,
    VariablesBothSides,
    DistributiveEquation,
    FractionEquation,
    Ratio,
    Proportion,
    Percent,
    SimpleInterest,
    ExponentBasics,
    ExponentProperties,
    NegativeExponents,
    ScientificNotation,
    CoordinatePlane,
    Slope,
    LinearEquation,
    AngleRelationships,
    PerimeterArea,
    Circle,
    Pythagorean,
    Volume,
    MeanMedian,
    Probability,
}

impl GeneratorKind {
    pub const ALL: [GeneratorKind; 35] = [
        GeneratorKind::AdditionSubtraction,
        GeneratorKind::MultiplicationDivision,
        GeneratorKind::OrderOfOperations,
        GeneratorKind::AbsoluteValue,
        GeneratorKind::SquareRoots,
        GeneratorKind::FractionAddition,
        GeneratorKind::FractionMultiplication,
        GeneratorKind::DecimalOperations,
        GeneratorKind::EvaluateExpression,
        GeneratorKind::DistributiveProperty,
        GeneratorKind::CombineLikeTerms,
        GeneratorKind::OneStepAddition,
        GeneratorKind::OneStepMultiplication,
        GeneratorKind::TwoStepEquation,
        GeneratorKind::VariablesBothSides,
        GeneratorKind::DistributiveEquation,
        GeneratorKind::FractionEquation,
        GeneratorKind::Ratio,
        GeneratorKind::Proportion,
        GeneratorKind::Percent,
        GeneratorKind::SimpleInterest,
        GeneratorKind::ExponentBasics,
        GeneratorKind::ExponentProperties,
        GeneratorKind::NegativeExponents,
        GeneratorKind::ScientificNotation,
        GeneratorKind::CoordinatePlane,
        GeneratorKind::Slope,
        GeneratorKind::LinearEquation,
        GeneratorKind::AngleRelationships,
        GeneratorKind::PerimeterArea,
        GeneratorKind::Circle,
        GeneratorKind::Pythagorean,
        GeneratorKind::Volume,
        GeneratorKind::MeanMedian,
        GeneratorKind::Probability,
    ];

    pub fn unit(self) -> Unit {
        use GeneratorKind::*;
        match self {
            AdditionSubtraction | MultiplicationDivision | OrderOfOperations
            | AbsoluteValue | SquareRoots => Unit::Fundamentals,
            FractionAddition | FractionMultiplication | DecimalOperations => {
                Unit::FractionsAndDecimals
            }
            EvaluateExpression | DistributiveProperty | CombineLikeTerms => Unit::Expressions,
            OneStepAddition | OneStepMultiplication | TwoStepEquation | VariablesBothSides
            | DistributiveEquation | FractionEquation => Unit::Equations,
            Ratio | Proportion | Percent | SimpleInterest => Unit::RatiosAndPercents,
            ExponentBasics | ExponentProperties | NegativeExponents | ScientificNotation => {
                Unit::Exponents
            }
            CoordinatePlane | Slope | LinearEquation => Unit::LinearFunctions,
            AngleRelationships | PerimeterArea | Circle | Pythagorean | Volume => Unit::Geometry,
            MeanMedian | Probability => Unit::DataAndProbability,
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GeneratorKind::AdditionSubtraction    => "Addition & Subtraction",
            GeneratorKind::MultiplicationDivision => "Multiplication & Division",
            GeneratorKind::OrderOfOperations      => "Order of Operations",
            GeneratorKind::AbsoluteValue          => "Absolute Value",
            GeneratorKind::SquareRoots            => "Square Roots",
            GeneratorKind::FractionAddition       => "Fraction Addition",
            GeneratorKind::FractionMultiplication => "Fraction Multiplication",
            GeneratorKind::DecimalOperations      => "Decimal Operations",
            GeneratorKind::EvaluateExpression     => "Evaluate Expression",
            GeneratorKind::DistributiveProperty   => "Distributive Property",
            GeneratorKind::CombineLikeTerms       => "Combine Like Terms",
            GeneratorKind::OneStepAddition        => "One-Step Equation (Addition)",
            GeneratorKind::OneStepMultiplication  => "One-Step Equation (Multiplication)",
            GeneratorKind::TwoStepEquation        => "Two-Step Equation",
            GeneratorKind::VariablesBothSides     => "Variables on Both Sides",
            GeneratorKind::DistributiveEquation   => "Distributive Equation",
            GeneratorKind::FractionEquation       => "Fraction Equation",
            GeneratorKind::Ratio                  => "Ratio",
            GeneratorKind::Proportion             => "Proportion",
            GeneratorKind::Percent                => "Percent",
            GeneratorKind::SimpleInterest         => "Simple Interest",
            GeneratorKind::ExponentBasics         => "Exponent Basics",
            GeneratorKind::ExponentProperties     => "Exponent Properties",
            GeneratorKind::NegativeExponents      => "Negative & Zero Exponents",
            GeneratorKind::ScientificNotation     => "Scientific Notation",
            GeneratorKind::CoordinatePlane        => "Coordinate Plane",
            GeneratorKind::Slope                  => "Slope",
            GeneratorKind::LinearEquation         => "Linear Equation",
            GeneratorKind::AngleRelationships     => "Angle Relationships",
            GeneratorKind::PerimeterArea          => "Perimeter & Area",
            GeneratorKind::Circle                 => "Circles",
            GeneratorKind::Pythagorean            => "Pythagorean Theorem",
            GeneratorKind::Volume                 => "Volume",
            GeneratorKind::MeanMedian             => "Mean, Median & Range",
            GeneratorKind::Probability            => "Probability",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Generator output
// ---------------------------------------------------------------------------

/// One (problem, answer) pair as produced by a generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub text: String,
    pub answer: String,
}

impl Problem {
    pub fn new(text: impl Into<String>, answer: impl Into<String>) -> Self {
        Problem { text: text.into(), answer: answer.into() }
    }
}

/// A numbered problem in the final sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    /// 1-based position in the assembled sequence.
    pub index: usize,
    pub problem_text: String,
    pub answer_text: String,
    pub kind: GeneratorKind,
    pub tier: Tier,
    /// Name of the stage that scheduled this problem.
    pub stage: String,
}

impl ProblemRecord {
    /// `"<index>. <problem>"`, the line handed to the renderer.
    pub fn problem_line(&self) -> String {
        format!("{}. {}", self.index, self.problem_text)
    }

    /// `"<index>. <answer>"`, the matching answer-key line.
    pub fn answer_line(&self) -> String {
        format!("{}. {}", self.index, self.answer_text)
    }
}

// ---------------------------------------------------------------------------
// Schedule data
// ---------------------------------------------------------------------------

/// A generator paired with the tiers it may be drawn at.
///
/// `allowed_tiers` is a multiset: listing a tier twice doubles its weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSpec {
    pub kind: GeneratorKind,
    pub allowed_tiers: Vec<Tier>,
}

impl GeneratorSpec {
    pub fn new(kind: GeneratorKind, allowed_tiers: &[Tier]) -> Self {
        GeneratorSpec { kind, allowed_tiers: allowed_tiers.to_vec() }
    }
}

/// A contiguous block `[start_index, end_index)` of 0-based positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    pub start_index: usize,
    pub end_index: usize,
    pub generator_specs: Vec<GeneratorSpec>,
}

impl Stage {
    pub fn new(
        name: impl Into<String>,
        start_index: usize,
        end_index: usize,
        generator_specs: Vec<GeneratorSpec>,
    ) -> Self {
        Stage { name: name.into(), start_index, end_index, generator_specs }
    }

    pub fn contains(&self, position: usize) -> bool {
        (self.start_index..self.end_index).contains(&position)
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

pub const DEFAULT_PROBLEM_COUNT: usize = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub count: usize,
    /// `None` draws a fresh seed; the chosen seed is reported on the result.
    pub seed: Option<u64>,
}

impl GenerationRequest {
    pub fn new(count: usize) -> Self {
        GenerationRequest { count, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        GenerationRequest::new(DEFAULT_PROBLEM_COUNT)
    }
}

/// The assembled, index-aligned problem and answer sequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationSet {
    pub seed: u64,
    pub records: Vec<ProblemRecord>,
}

impl EquationSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Problem lines, each formatted `"<index>. <text>"`.
    pub fn problems(&self) -> Vec<String> {
        self.records.iter().map(ProblemRecord::problem_line).collect()
    }

    /// Answer lines, aligned 1:1 with [`EquationSet::problems`].
    pub fn answers(&self) -> Vec<String> {
        self.records.iter().map(ProblemRecord::answer_line).collect()
    }
}
