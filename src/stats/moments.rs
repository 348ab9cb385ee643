//! Closed-form moments of binomial distributions
//!
//! Summary statistics the forecast layer reports next to the full
//! distribution: expected successes, spread, and the widened spread when the
//! trial count is itself a random variable.

/// Expected number of successes, n * p. Out-of-range input yields 0.
pub fn mean_of_distribution(trials: i32, probability: f64) -> f64 {
    if trials < 1 {
        tracing::debug!("mean_of_distribution: trial count {} below 1, returning 0", trials);
        return 0.0;
    }

    if probability <= 0.0 {
        tracing::debug!(
            "mean_of_distribution: probability {} is non-positive, returning 0",
            probability
        );
        return 0.0;
    }

    trials as f64 * probability
}

/// Variance of the success count, n * p * (1 - p). Out-of-range input
/// yields 0, as does p = 1 where the count is deterministic.
pub fn variance_of_distribution(trials: i32, probability: f64) -> f64 {
    if trials < 0 {
        tracing::debug!(
            "variance_of_distribution: trial count {} is negative, returning 0",
            trials
        );
        return 0.0;
    }

    if probability < 0.0 {
        tracing::debug!(
            "variance_of_distribution: probability {} is negative, returning 0",
            probability
        );
        return 0.0;
    }

    if probability == 1.0 {
        tracing::debug!("variance_of_distribution: probability is 1, returning 0");
        return 0.0;
    }

    trials as f64 * probability * (1.0 - probability)
}

/// Standard deviation of the success count
pub fn standard_deviation_of_distribution(trials: i32, probability: f64) -> f64 {
    variance_of_distribution(trials, probability).sqrt()
}

/// Variance of the success count when the trial count is itself random:
/// Var(X) = E[N] * p * (1 - p) + Var(N) * p^2
pub fn combined_variance_of_distribution(
    expected_trials: i32,
    trials_variance: f64,
    probability: f64,
) -> f64 {
    (expected_trials as f64 * probability * (1.0 - probability))
        + (trials_variance * probability.powi(2))
}

/// Standard deviation of the success count when the trial count is itself
/// random
pub fn combined_standard_deviation_of_distribution(
    expected_trials: i32,
    trials_variance: f64,
    probability: f64,
) -> f64 {
    combined_variance_of_distribution(expected_trials, trials_variance, probability).sqrt()
}
