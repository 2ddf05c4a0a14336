//! Savvy users - already good; a FAIL makes them briefly extra careful
//!
//! After a FAIL spike, success decays linearly back to the baseline triple
//! drawn at initialization, which is then restored exactly.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::training::outcome::Outcome;
use crate::training::probability::{round3, ProbabilityState};

const MISS_MIN: f64 = 0.05;
const MISS_MAX: f64 = 0.30;

/// Initial fail is at most miss / FAIL_MISS_RATIO
const FAIL_MISS_RATIO: f64 = 6.0;

const SUCCESS_DECAY: f64 = 0.02;
const MISS_RECOVERY: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavvyState {
    /// Initial triple, kept for the lifetime of the user
    pub baseline: ProbabilityState,
}

pub fn initialize<R: Rng + ?Sized>(rng: &mut R) -> (ProbabilityState, SavvyState) {
    let miss = rng.gen_range(MISS_MIN..=MISS_MAX);
    let fail = rng.gen_range(0.0..=miss / FAIL_MISS_RATIO);
    let probabilities = ProbabilityState::with_success_remainder(miss, fail);
    (probabilities, SavvyState { baseline: probabilities })
}

pub fn update(
    probabilities: &ProbabilityState,
    state: &mut SavvyState,
    outcome: Outcome,
) -> ProbabilityState {
    let baseline = state.baseline;

    if outcome == Outcome::Fail {
        let success = probabilities.success + probabilities.miss / 2.0 + probabilities.fail / 2.0;
        return ProbabilityState::with_fail_remainder(success, probabilities.miss / 2.0);
    }

    if probabilities.success <= baseline.success {
        return *probabilities;
    }

    let success = round3(probabilities.success - SUCCESS_DECAY);
    if success <= baseline.success {
        baseline
    } else {
        ProbabilityState::with_fail_remainder(success, probabilities.miss + MISS_RECOVERY)
    }
}
