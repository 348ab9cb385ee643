pub mod outcome;

pub use outcome::{approx_eq_all, BinomialOutcome, DistributionKind};
