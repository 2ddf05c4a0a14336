//! Outcome probability triple and its sum-to-one invariant
//!
//! Every mutation goes through one of the `with_*_remainder` constructors:
//! two components are set explicitly and the third is re-derived as
//! `1 - a - b`, so the triple never drifts away from a valid distribution.

use serde::{Deserialize, Serialize};

/// Precision every probability is kept at
pub const PRECISION: f64 = 1000.0;

/// Allowed deviation of `success + miss + fail` from 1
pub const SUM_TOLERANCE: f64 = 0.001;

/// Round to three decimals
pub fn round3(value: f64) -> f64 {
    (value * PRECISION).round() / PRECISION
}

fn clamp_unit(value: f64) -> f64 {
    round3(value.clamp(0.0, 1.0))
}

/// Current (success, miss, fail) distribution of a user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityState {
    pub success: f64,
    pub miss: f64,
    pub fail: f64,
}

impl ProbabilityState {
    /// Triple from explicit values, each rounded to three decimals
    ///
    /// Callers are expected to pass a distribution; nothing is rebalanced here.
    pub fn new(success: f64, miss: f64, fail: f64) -> Self {
        Self {
            success: clamp_unit(success),
            miss: clamp_unit(miss),
            fail: clamp_unit(fail),
        }
    }

    /// Always MISS
    pub fn certain_miss() -> Self {
        Self { success: 0.0, miss: 1.0, fail: 0.0 }
    }

    /// Set success and miss, derive fail
    pub fn with_fail_remainder(success: f64, miss: f64) -> Self {
        let (success, miss, fail) = rebalance(success, miss);
        Self { success, miss, fail }
    }

    /// Set success and fail, derive miss
    pub fn with_miss_remainder(success: f64, fail: f64) -> Self {
        let (success, fail, miss) = rebalance(success, fail);
        Self { success, miss, fail }
    }

    /// Set miss and fail, derive success
    pub fn with_success_remainder(miss: f64, fail: f64) -> Self {
        let (miss, fail, success) = rebalance(miss, fail);
        Self { success, miss, fail }
    }

    pub fn sum(&self) -> f64 {
        self.success + self.miss + self.fail
    }

    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() <= SUM_TOLERANCE + f64::EPSILON
    }
}

/// Clamp `primary`, fit `secondary` into what is left, derive the remainder
fn rebalance(primary: f64, secondary: f64) -> (f64, f64, f64) {
    let primary = clamp_unit(primary);
    let secondary = round3(secondary.clamp(0.0, 1.0 - primary));
    let remainder = round3(1.0 - primary - secondary).max(0.0);
    (primary, secondary, remainder)
}
