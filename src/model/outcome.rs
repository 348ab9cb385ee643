//! Outcome value types shared by the distribution builders and transforms

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a discrete distribution: the probability assigned to a
/// grouped-success count. Whether that probability reads as P(X = k),
/// P(X <= k), or P(X >= k) depends on which transform produced the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BinomialOutcome {
    /// The grouped-success count k this entry describes
    pub successes: u32,
    /// The probability mass assigned to k
    pub probability: f64,
}

impl BinomialOutcome {
    pub fn new(successes: u32, probability: f64) -> Self {
        Self {
            successes,
            probability,
        }
    }

    /// Tolerant comparison: exact on `successes`, probabilities rounded to
    /// 4 decimal places. Deliberately not `PartialEq` - container lookups
    /// and dedup on this type stay exact.
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.successes == other.successes
            && round_to_4(self.probability) == round_to_4(other.probability)
    }
}

impl fmt::Display for BinomialOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P({}) = {:.4}", self.successes, self.probability)
    }
}

/// Entry-by-entry `approx_eq` over two whole distributions
pub fn approx_eq_all(left: &[BinomialOutcome], right: &[BinomialOutcome]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(a, b)| a.approx_eq(b))
}

fn round_to_4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Which post-processing step a distribution request applies to the
/// binomial base before returning it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DistributionKind {
    /// P(X = k) for each k
    #[default]
    Binomial,
    /// P(X <= k) for each k
    Cumulative,
    /// P(X >= k) for each k
    Survivor,
}
