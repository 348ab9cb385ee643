pub mod arithmetic;
pub mod builder;
pub mod cache;
pub mod moments;
pub mod pmf;
pub mod transforms;

pub use builder::{DistributionEngine, GroupSize, Trials};
pub use pmf::MassFunction;
