//! Distribution construction
//!
//! Builds the full distribution - one `BinomialOutcome` per achievable
//! grouped-success count - for every combination of fixed or ranged trial
//! counts and fixed or ranged group sizes. Out-of-range parameters never
//! fail: the combat layer routinely derives "zero attacks" or "impossible
//! weapon" inputs, and those must flow through the pipeline as degenerate
//! distributions, not as errors.

use crate::core::constants::PMF_CACHE_CAPACITY;
use crate::model::{BinomialOutcome, DistributionKind};
use crate::stats::pmf::MassFunction;
use crate::stats::transforms;
use serde::{Deserialize, Serialize};

/// Trial-count parameter: a known count, or an inclusive range for attacks
/// whose number is itself rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trials {
    Fixed(i32),
    Range { min: i32, max: i32 },
}

impl Trials {
    pub fn fixed(count: i32) -> Self {
        Trials::Fixed(count)
    }

    pub fn range(min: i32, max: i32) -> Self {
        Trials::Range { min, max }
    }

    fn bounds(self) -> (i32, i32) {
        match self {
            Trials::Fixed(count) => (count, count),
            Trials::Range { min, max } => (min, max),
        }
    }
}

/// Group-size parameter: how many raw trial successes collapse into one
/// success of the distribution (e.g. wounds per model destroyed), fixed or
/// ranged when the weapon's damage is itself rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupSize {
    Fixed(i32),
    Range { min: i32, max: i32 },
}

impl GroupSize {
    pub fn fixed(count: i32) -> Self {
        GroupSize::Fixed(count)
    }

    pub fn range(min: i32, max: i32) -> Self {
        GroupSize::Range { min, max }
    }

    fn bounds(self) -> (i32, i32) {
        match self {
            GroupSize::Fixed(count) => (count, count),
            GroupSize::Range { min, max } => (min, max),
        }
    }
}

impl Default for GroupSize {
    fn default() -> Self {
        GroupSize::Fixed(1)
    }
}

/// The distribution engine: a memoized mass function plus the validation
/// and construction logic for every supported parameterization.
#[derive(Debug, Default)]
pub struct DistributionEngine {
    pmf: MassFunction,
}

impl DistributionEngine {
    pub fn new() -> Self {
        Self::with_cache_capacity(PMF_CACHE_CAPACITY)
    }

    pub fn with_cache_capacity(capacity: usize) -> Self {
        Self {
            pmf: MassFunction::with_capacity(capacity),
        }
    }

    /// P(X = successes) for a single parameter triple. See
    /// [`MassFunction::evaluate`].
    pub fn probability_mass_function(&self, trials: i32, successes: i32, probability: f64) -> f64 {
        self.pmf.evaluate(trials, successes, probability)
    }

    /// The memoized mass function backing this engine
    pub fn mass_function(&self) -> &MassFunction {
        &self.pmf
    }

    /// P(X = k) for every achievable grouped-success count k
    pub fn binomial_distribution(
        &self,
        trials: Trials,
        probability: f64,
        group: GroupSize,
    ) -> Vec<BinomialOutcome> {
        self.distribution(DistributionKind::Binomial, trials, probability, group)
    }

    /// P(X <= k) for every achievable grouped-success count k. The sequence
    /// is non-decreasing and ends at exactly 1.0.
    pub fn cumulative_distribution(
        &self,
        trials: Trials,
        probability: f64,
        group: GroupSize,
    ) -> Vec<BinomialOutcome> {
        self.distribution(DistributionKind::Cumulative, trials, probability, group)
    }

    /// P(X >= k) for every achievable grouped-success count k. The sequence
    /// is non-increasing and starts at exactly 1.0.
    pub fn survivor_distribution(
        &self,
        trials: Trials,
        probability: f64,
        group: GroupSize,
    ) -> Vec<BinomialOutcome> {
        self.distribution(DistributionKind::Survivor, trials, probability, group)
    }

    /// Unified entry point: validate, build the binomial base, apply the
    /// requested transform.
    ///
    /// Validation order and the degenerate shapes it produces are part of
    /// the public contract:
    /// 1. non-positive or inverted trial bounds -> the point distribution
    /// 2. probability <= 0 -> zero successes certain, all other counts
    ///    impossible (transformed)
    /// 3. probability >= 1, cumulative and survivor only -> all counts
    ///    impossible except the maximum (transformed); the binomial kind
    ///    leaves this boundary to the mass function's closed form
    /// 4. non-positive, inverted, or oversized group bounds -> the point
    ///    distribution
    pub fn distribution(
        &self,
        kind: DistributionKind,
        trials: Trials,
        probability: f64,
        group: GroupSize,
    ) -> Vec<BinomialOutcome> {
        let (min_trials, max_trials) = trials.bounds();

        if min_trials <= 0 || max_trials <= 0 {
            tracing::debug!(
                "distribution: trial count {}..{} is out of range, returning point distribution",
                min_trials,
                max_trials
            );
            return point_distribution();
        }

        if min_trials > max_trials {
            tracing::debug!(
                "distribution: min trials {} exceeds max trials {}, returning point distribution",
                min_trials,
                max_trials
            );
            return point_distribution();
        }

        if probability <= 0.0 {
            tracing::debug!(
                "distribution: probability {} is non-positive, zero successes are certain",
                probability
            );
            return apply(kind, zero_successes_certain(max_trials));
        }

        if kind != DistributionKind::Binomial && probability >= 1.0 {
            tracing::debug!(
                "distribution: probability {} is at or above 1, full successes are certain",
                probability
            );
            return apply(kind, full_successes_certain(max_trials));
        }

        let (min_group, max_group) = group.bounds();

        if min_group <= 0 || max_group <= 0 {
            tracing::debug!(
                "distribution: group size {}..{} is out of range, returning point distribution",
                min_group,
                max_group
            );
            return point_distribution();
        }

        if min_group > max_group {
            tracing::debug!(
                "distribution: min group size {} exceeds max group size {}, returning point distribution",
                min_group,
                max_group
            );
            return point_distribution();
        }

        if min_group > max_trials {
            tracing::debug!(
                "distribution: group size {} exceeds trial count {}, returning point distribution",
                min_group,
                max_trials
            );
            return point_distribution();
        }

        // Equal bounds collapse to the fixed kernels; results are identical
        // to the general forms, just cheaper.
        let base = match ((min_trials, max_trials), (min_group, max_group)) {
            ((n, m), (g, h)) if n == m && g == h => self.fixed_trials_fixed_group(m, probability, h),
            ((n, m), (g, h)) if n == m => self.fixed_trials_ranged_group(m, probability, g, h),
            ((_, m), (g, h)) if g == h => self.ranged_trials_fixed_group(m, probability, h),
            ((_, m), (g, h)) => self.ranged_trials_ranged_group(m, probability, g, h),
        };

        apply(kind, base)
    }

    /// Fixed n, fixed g: one PMF evaluation per k up to floor(n/g).
    ///
    /// Grouping by g > 1 samples every g-th point of the underlying binomial
    /// distribution, so the result only carries part of the total mass and
    /// is renormalized. At g = 1 this is the ordinary binomial distribution
    /// and is returned as computed.
    fn fixed_trials_fixed_group(
        &self,
        trials: i32,
        probability: f64,
        group: i32,
    ) -> Vec<BinomialOutcome> {
        let max_k = trials / group;
        let mut base = Vec::with_capacity((max_k + 1) as usize);

        for k in 0..=max_k {
            let grouped_successes = k * group;
            let mass = self.pmf.evaluate(trials, grouped_successes, probability);
            base.push(BinomialOutcome::new(k as u32, mass));
        }

        if group > 1 {
            base = transforms::normalize(&base);
        }

        base
    }

    /// Fixed n, ranged g: uniform mixture over the group sizes. Each k
    /// averages the per-g masses with equal weight, modeling an unknown
    /// group size as equally likely to be any value in the range.
    fn fixed_trials_ranged_group(
        &self,
        trials: i32,
        probability: f64,
        min_group: i32,
        max_group: i32,
    ) -> Vec<BinomialOutcome> {
        let max_k = trials / min_group;
        let mut mass_sums = vec![0.0; (max_k + 1) as usize];

        for group in min_group..=max_group {
            for k in 0..=max_k {
                let grouped_successes = k * group;
                mass_sums[k as usize] += self.pmf.evaluate(trials, grouped_successes, probability);
            }
        }

        let group_count = (max_group - min_group + 1) as f64;
        let base: Vec<BinomialOutcome> = mass_sums
            .iter()
            .enumerate()
            .map(|(k, sum)| BinomialOutcome::new(k as u32, sum / group_count))
            .collect();

        transforms::normalize(&base)
    }

    /// Ranged n, fixed g: uniform mixture over trial counts.
    ///
    /// The mixture averages over n = 1..=max_trials; the minimum bound gates
    /// validation only and does not enter the average.
    fn ranged_trials_fixed_group(
        &self,
        max_trials: i32,
        probability: f64,
        group: i32,
    ) -> Vec<BinomialOutcome> {
        let max_k = max_trials / group;
        let mut base = Vec::with_capacity((max_k + 1) as usize);

        for k in 0..=max_k {
            let grouped_successes = k * group;
            let mut combined = 0.0;

            for trials in 1..=max_trials {
                combined += self.pmf.evaluate(trials, grouped_successes, probability);
            }

            if combined > 0.0 {
                combined /= max_trials as f64;
            }

            base.push(BinomialOutcome::new(k as u32, combined));
        }

        transforms::normalize(&base)
    }

    /// Ranged n, ranged g: the nested mixture - for every group size in
    /// range, average over trial counts as in the ranged-trials kernel, then
    /// average the per-group results with equal weight.
    fn ranged_trials_ranged_group(
        &self,
        max_trials: i32,
        probability: f64,
        min_group: i32,
        max_group: i32,
    ) -> Vec<BinomialOutcome> {
        let max_k = max_trials / min_group;
        let mut mass_sums = vec![0.0; (max_k + 1) as usize];

        for group in min_group..=max_group {
            for k in 0..=max_k {
                let grouped_successes = k * group;
                let mut combined = 0.0;

                for trials in 1..=max_trials {
                    combined += self.pmf.evaluate(trials, grouped_successes, probability);
                }

                if combined > 0.0 {
                    combined /= max_trials as f64;
                }

                mass_sums[k as usize] += combined;
            }
        }

        let group_count = (max_group - min_group + 1) as f64;
        let base: Vec<BinomialOutcome> = mass_sums
            .iter()
            .enumerate()
            .map(|(k, sum)| BinomialOutcome::new(k as u32, sum / group_count))
            .collect();

        transforms::normalize(&base)
    }
}

/// The canonical degenerate distribution: zero successes, certainly
fn point_distribution() -> Vec<BinomialOutcome> {
    vec![BinomialOutcome::new(0, 1.0)]
}

/// Base shape for probability <= 0: zero successes certain, every other
/// count impossible
fn zero_successes_certain(max_trials: i32) -> Vec<BinomialOutcome> {
    let mut base = vec![BinomialOutcome::new(0, 1.0)];

    for k in 1..=max_trials {
        base.push(BinomialOutcome::new(k as u32, 0.0));
    }

    base
}

/// Base shape for probability >= 1: every count impossible except the
/// maximum, which is certain
fn full_successes_certain(max_trials: i32) -> Vec<BinomialOutcome> {
    let mut base = Vec::with_capacity((max_trials + 1) as usize);

    for k in 0..max_trials {
        base.push(BinomialOutcome::new(k as u32, 0.0));
    }

    base.push(BinomialOutcome::new(max_trials as u32, 1.0));
    base
}

fn apply(kind: DistributionKind, base: Vec<BinomialOutcome>) -> Vec<BinomialOutcome> {
    match kind {
        DistributionKind::Binomial => base,
        DistributionKind::Cumulative => transforms::cumulative(&base),
        DistributionKind::Survivor => transforms::survivor(&base),
    }
}
