//! Memoized binomial probability mass function

use crate::core::constants::PMF_CACHE_CAPACITY;
use crate::stats::arithmetic::binomial_coefficient;
use crate::stats::cache::BoundedCache;
use num_traits::ToPrimitive;
use ordered_float::OrderedFloat;
use std::cell::RefCell;

/// Cache key: the exact input triple of an evaluation
type PmfKey = (i32, i32, OrderedFloat<f64>);

/// Binomial probability mass function with bounded memoization.
///
/// The cache is owned explicitly - constructor-provided capacity, no global
/// state - so callers control its footprint and tests can isolate it.
/// Single-threaded by design: the cache sits behind a `RefCell` so that
/// evaluation stays `&self`.
#[derive(Debug)]
pub struct MassFunction {
    cache: RefCell<BoundedCache<PmfKey, f64>>,
}

impl MassFunction {
    pub fn new() -> Self {
        Self::with_capacity(PMF_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: RefCell::new(BoundedCache::new(capacity)),
        }
    }

    /// P(X = successes) for `trials` independent Bernoulli trials with
    /// per-trial success chance `probability`, via C(n,k) * p^k * (1-p)^(n-k).
    ///
    /// Out-of-range input describes an impossible outcome and yields 0;
    /// this function never fails. `probability >= 1` short-circuits to the
    /// exact boundary result instead of exponentiating.
    pub fn evaluate(&self, trials: i32, successes: i32, probability: f64) -> f64 {
        let key = (trials, successes, OrderedFloat(probability));

        if let Some(cached) = self.cache.borrow().get(&key) {
            return cached;
        }

        if trials < 1 || successes < 0 || successes > trials || probability <= 0.0 {
            return 0.0;
        }

        if probability >= 1.0 {
            return if successes == trials { 1.0 } else { 0.0 };
        }

        let coefficient = binomial_coefficient(trials, successes)
            .to_f64()
            .unwrap_or(f64::INFINITY);
        let success_mass = probability_of_multiple_successes(probability, successes);
        let failure_mass = probability_of_multiple_successes(1.0 - probability, trials - successes);
        let result = coefficient * success_mass * failure_mass;

        self.cache.borrow_mut().insert(key, result);

        result
    }

    /// Entries currently memoized
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Drop every memoized entry
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl Default for MassFunction {
    fn default() -> Self {
        Self::new()
    }
}

/// probability^successes with the boundary conventions the distribution
/// builders rely on: p <= 0 is impossible (0), p >= 1 is certain (1), and a
/// negative success count is impossible (0).
pub fn probability_of_multiple_successes(probability: f64, successes: i32) -> f64 {
    if probability <= 0.0 {
        tracing::debug!(
            "probability_of_multiple_successes: probability {} is non-positive, returning 0",
            probability
        );
        return 0.0;
    }

    if probability >= 1.0 {
        tracing::debug!(
            "probability_of_multiple_successes: probability {} is at or above 1, returning 1",
            probability
        );
        return 1.0;
    }

    if successes < 0 {
        tracing::debug!(
            "probability_of_multiple_successes: success count {} is negative, returning 0",
            successes
        );
        return 0.0;
    }

    probability.powi(successes)
}
