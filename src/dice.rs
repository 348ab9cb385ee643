//! Single-die helpers
//!
//! Per-roll probabilities and summary statistics for fair dice, the raw
//! inputs the combat layer turns into trial probabilities.

pub use crate::core::constants::{AUTOMATIC_FAIL, AUTOMATIC_SUCCESS, NUMBER_OF_SIDES};

/// Probability that one roll of a fair die with `possible_results` faces
/// lands on one of `successful_results` faces.
///
/// Out-of-range input degenerates: no valid die or no winning faces yields
/// 0, more winning faces than the die has yields 1.
pub fn probability_of_success(possible_results: i32, successful_results: i32) -> f64 {
    if possible_results <= 0 {
        tracing::debug!(
            "probability_of_success: possible results {} is non-positive, returning 0",
            possible_results
        );
        return 0.0;
    }

    if successful_results < 1 {
        tracing::debug!(
            "probability_of_success: successful results {} below 1, returning 0",
            successful_results
        );
        return 0.0;
    }

    if successful_results > possible_results {
        tracing::debug!(
            "probability_of_success: successful results {} exceeds possible results {}, returning 1",
            successful_results,
            possible_results
        );
        return 1.0;
    }

    successful_results as f64 / possible_results as f64
}

/// Mean face of a fair die with `possible_results` faces, rounded to the
/// nearest integer with ties going to the even value. 0 when the die has no
/// faces.
pub fn mean_result(possible_results: i32) -> i32 {
    if possible_results <= 0 {
        return 0;
    }

    let sum = (possible_results as f64 * (possible_results as f64 + 1.0)) / 2.0;

    (sum / possible_results as f64).round_ties_even() as i32
}

/// Variance of the total when a fair die with `possible_results` faces is
/// rolled `trials` times. A die with one face (or fewer) has no spread.
pub fn variance_of_results(trials: i32, possible_results: f64) -> f64 {
    if trials <= 0 || possible_results <= 1.0 {
        return 0.0;
    }

    // Single-roll variance of a fair die: (faces^2 - 1) / 12
    let single_roll_variance = (possible_results.powi(2) - 1.0) / 12.0;

    trials as f64 * single_roll_variance
}

/// Standard deviation of the total over repeated rolls
pub fn standard_deviation_of_results(trials: i32, possible_results: f64) -> f64 {
    variance_of_results(trials, possible_results).sqrt()
}
