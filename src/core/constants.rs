//! Engine constants - dice conventions and numeric bounds in one place

// Dice conventions
pub const NUMBER_OF_SIDES: i32 = 6;
pub const AUTOMATIC_FAIL: i32 = 1;
pub const AUTOMATIC_SUCCESS: i32 = 6;

/// Entry bound for the probability mass function cache
pub const PMF_CACHE_CAPACITY: usize = 5000;

/// Tolerance when comparing accumulated probability mass to 0.0 or 1.0
pub const PROBABILITY_TOLERANCE: f64 = 1e-10;
