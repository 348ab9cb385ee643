//! Distribution post-processing: renormalization and the cumulative and
//! survivor transforms

use crate::core::constants::PROBABILITY_TOLERANCE;
use crate::model::BinomialOutcome;

/// Rescale probabilities so the distribution sums to 1.0.
///
/// Distributions built by grouping or averaging carry a total slightly off
/// 1.0. Totals already within tolerance of 1.0 are left alone, as are totals
/// within tolerance of 0.0, where dividing would amplify noise.
pub fn normalize(distribution: &[BinomialOutcome]) -> Vec<BinomialOutcome> {
    if distribution.is_empty() {
        return Vec::new();
    }

    let total: f64 = distribution.iter().map(|outcome| outcome.probability).sum();

    if total.abs() < PROBABILITY_TOLERANCE || (total - 1.0).abs() < PROBABILITY_TOLERANCE {
        return distribution.to_vec();
    }

    distribution
        .iter()
        .map(|outcome| BinomialOutcome::new(outcome.successes, outcome.probability / total))
        .collect()
}

/// P(X <= k) for each entry of a binomial distribution.
///
/// The running sum is clamped to 1.0 throughout and snapped to exactly 1.0
/// at the final entry when within tolerance.
pub fn cumulative(distribution: &[BinomialOutcome]) -> Vec<BinomialOutcome> {
    let last = distribution.len().saturating_sub(1);
    let mut running = 0.0;

    distribution
        .iter()
        .enumerate()
        .map(|(index, outcome)| {
            running += outcome.probability;

            let probability = if index == last && (running - 1.0).abs() < PROBABILITY_TOLERANCE {
                1.0
            } else {
                running.min(1.0)
            };

            BinomialOutcome::new(outcome.successes, probability)
        })
        .collect()
}

/// P(X >= k) for each entry: the running sum walks from the highest k
/// downward, with the same clamp-and-snap policy at the k = 0 end.
pub fn survivor(distribution: &[BinomialOutcome]) -> Vec<BinomialOutcome> {
    let mut survivor = Vec::with_capacity(distribution.len());
    let mut running = 0.0;

    for (index, outcome) in distribution.iter().enumerate().rev() {
        running += outcome.probability;

        let probability = if index == 0 && (running - 1.0).abs() < PROBABILITY_TOLERANCE {
            1.0
        } else {
            running.min(1.0)
        };

        survivor.push(BinomialOutcome::new(outcome.successes, probability));
    }

    survivor.reverse();
    survivor
}
