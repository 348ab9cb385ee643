//! Exact combinatorial arithmetic
//!
//! Factorials leave u64 range at 21!, well inside realistic trial counts,
//! so every result is an arbitrary-precision integer.

use crate::core::error::{EngineError, Result};
use num_bigint::BigUint;
use num_traits::One;

/// n! as an arbitrary-precision integer.
///
/// A negative argument is outside the function's domain and fails hard;
/// clamping here would hide a caller defect. 0! is 1.
pub fn factorial(number: i32) -> Result<BigUint> {
    if number < 0 {
        return Err(EngineError::NegativeFactorial(number));
    }

    Ok(factorial_of_nonnegative(number as u32))
}

/// C(population, combination_size): the number of unordered combinations of
/// `combination_size` elements drawn from `population`.
///
/// Out-of-range arguments mean "zero ways to choose" - a legitimate query
/// result, not a caller error - and return 0.
pub fn binomial_coefficient(population: i32, combination_size: i32) -> BigUint {
    if population < 0 {
        tracing::debug!(
            "binomial_coefficient: population {} is negative, returning 0",
            population
        );
        return BigUint::default();
    }

    if combination_size < 0 {
        tracing::debug!(
            "binomial_coefficient: combination size {} is negative, returning 0",
            combination_size
        );
        return BigUint::default();
    }

    if combination_size > population {
        tracing::debug!(
            "binomial_coefficient: combination size {} exceeds population {}, returning 0",
            combination_size,
            population
        );
        return BigUint::default();
    }

    let population_factorial = factorial_of_nonnegative(population as u32);
    let combination_factorial = factorial_of_nonnegative(combination_size as u32);
    let difference_factorial = factorial_of_nonnegative((population - combination_size) as u32);

    // Exact division: the quotient is always an integer
    population_factorial / (combination_factorial * difference_factorial)
}

fn factorial_of_nonnegative(number: u32) -> BigUint {
    let mut result = BigUint::one();

    for i in 2..=number {
        result *= i;
    }

    result
}
