use rand::Rng;

use crate::problem_engine::{
    error::GenerateError,
    models::{GeneratorKind, Problem, Tier},
    topics::{equations, exponents, expressions, fractions, fundamentals, geometry, linear, ratios, statistics},
};

/// Core dispatch: routes a kind and tier to its topic generator.
///
/// Infallible generators are lifted into `Ok`; the few that divide by a drawn
/// value report a bad draw as [`GenerateError`] for the assembler to retry.
pub fn generate_problem<R: Rng>(
    kind: GeneratorKind,
    tier: Tier,
    rng: &mut R,
) -> Result<Problem, GenerateError> {
    use GeneratorKind as K;

    let problem = match kind {
        K::AdditionSubtraction    => fundamentals::generate_addition_subtraction(rng, tier),
        K::MultiplicationDivision => fundamentals::generate_multiplication_division(rng, tier),
        K::OrderOfOperations      => fundamentals::generate_order_of_operations(rng, tier),
        K::AbsoluteValue          => fundamentals::generate_absolute_value(rng, tier),
        K::SquareRoots            => fundamentals::generate_square_roots(rng, tier),

        K::FractionAddition       => fractions::generate_fraction_addition(rng, tier),
        K::FractionMultiplication => fractions::generate_fraction_multiplication(rng, tier),
        K::DecimalOperations      => fractions::generate_decimal_operations(rng, tier)?,

        K::EvaluateExpression     => expressions::generate_evaluate_expression(rng, tier),
        K::DistributiveProperty   => expressions::generate_distributive_property(rng, tier),
        K::CombineLikeTerms       => expressions::generate_combine_like_terms(rng, tier),

        K::OneStepAddition        => equations::generate_one_step_addition(rng, tier),
        K::OneStepMultiplication  => equations::generate_one_step_multiplication(rng, tier),
        K::TwoStepEquation        => equations::generate_two_step_equation(rng, tier),
        K::VariablesBothSides     => equations::generate_variables_both_sides(rng, tier),
        K::DistributiveEquation   => equations::generate_distributive_equation(rng, tier),
        K::FractionEquation       => equations::generate_fraction_equation(rng, tier)?,

        K::Ratio                  => ratios::generate_ratio(rng, tier)?,
        K::Proportion             => ratios::generate_proportion(rng, tier)?,
        K::Percent                => ratios::generate_percent(rng, tier)?,
        K::SimpleInterest         => ratios::generate_simple_interest(rng, tier),

        K::ExponentBasics         => exponents::generate_exponent_basics(rng, tier),
        K::ExponentProperties     => exponents::generate_exponent_properties(rng, tier),
        K::NegativeExponents      => exponents::generate_negative_exponents(rng, tier),
        K::ScientificNotation     => exponents::generate_scientific_notation(rng, tier),

        K::CoordinatePlane        => linear::generate_coordinate_plane(rng, tier),
        K::Slope                  => linear::generate_slope(rng, tier),
        K::LinearEquation         => linear::generate_linear_equation(rng, tier)?,

        K::AngleRelationships     => geometry::generate_angle_relationships(rng, tier),
        K::PerimeterArea          => geometry::generate_perimeter_area(rng, tier),
        K::Circle                 => geometry::generate_circle(rng, tier),
        K::Pythagorean            => geometry::generate_pythagorean(rng, tier),
        K::Volume                 => geometry::generate_volume(rng, tier),

        K::MeanMedian             => statistics::generate_mean_median(rng, tier)?,
        K::Probability            => statistics::generate_probability(rng, tier),
    };
    Ok(problem)
}
