//! Unmotivated users - mostly ignore training, briefly wake up after falling for a phish

use rand::Rng;

use crate::training::outcome::Outcome;
use crate::training::probability::ProbabilityState;

const FAIL_MIN: f64 = 0.05;
const FAIL_MAX: f64 = 0.15;

/// Share of the previous miss probability converted to success after a FAIL
const FAIL_SPIKE_FACTOR: f64 = 0.2;

/// Per-trial decay of success after a SUCCESS
const SUCCESS_DECAY: f64 = 0.04;

/// Success starts at zero; fail is fixed for life
pub fn initialize<R: Rng + ?Sized>(rng: &mut R) -> ProbabilityState {
    let fail = rng.gen_range(FAIL_MIN..=FAIL_MAX);
    ProbabilityState::with_miss_remainder(0.0, fail)
}

pub fn update(probabilities: &ProbabilityState, outcome: Outcome) -> ProbabilityState {
    match outcome {
        Outcome::Fail => ProbabilityState::with_miss_remainder(
            FAIL_SPIKE_FACTOR * probabilities.miss,
            probabilities.fail,
        ),
        Outcome::Success => ProbabilityState::with_miss_remainder(
            (probabilities.success - SUCCESS_DECAY).max(0.0),
            probabilities.fail,
        ),
        Outcome::Miss => *probabilities,
    }
}
