//! Learning users - every FAIL or MISS teaches them something, with diminishing returns
//!
//! The learning increment for an event is
//! `weight * (BASE_STEP - min(knowledge * KNOWLEDGE_DAMPING, MAX_DAMPING))`,
//! so the effect shrinks as knowledge accumulates and bottoms out at
//! `BASE_STEP - MAX_DAMPING` (0.001 before weighting).

use rand::distributions::Distribution;
use rand::Rng;
use serde::{Deserialize, Serialize};
use statrs::distribution::Normal;

use crate::core::error::{DrillError, Result};
use crate::training::outcome::Outcome;
use crate::training::probability::ProbabilityState;

const MISS_MEAN: f64 = 0.6;
const MISS_STD_DEV: f64 = 0.15;
const MISS_MIN: f64 = 0.1;
const MISS_MAX: f64 = 0.8;

const FAIL_MIN: f64 = 0.05;
const FAIL_MAX: f64 = 0.20;

const BASE_STEP: f64 = 0.01;
const KNOWLEDGE_DAMPING: f64 = 0.00001;
const MAX_DAMPING: f64 = 0.009;

/// Falling for a phish teaches more than ignoring one
const FAIL_WEIGHT: f64 = 1.0;
const MISS_WEIGHT: f64 = 0.6;

/// Miss drops twice as fast as fail per learning event
const MISS_STEP_FACTOR: f64 = 2.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningState {
    /// Number of learning events so far
    pub knowledge: u32,
}

/// Miss is drawn from a normal distribution, resampled until it lands in range
pub fn initialize<R: Rng + ?Sized>(rng: &mut R) -> Result<(ProbabilityState, LearningState)> {
    let normal = Normal::new(MISS_MEAN, MISS_STD_DEV)
        .map_err(|e| DrillError::InvalidConfig(format!("learning miss distribution: {}", e)))?;

    let miss = loop {
        let candidate = normal.sample(rng);
        if (MISS_MIN..=MISS_MAX).contains(&candidate) {
            break candidate;
        }
    };
    let fail = rng.gen_range(FAIL_MIN..=FAIL_MAX);

    Ok((
        ProbabilityState::with_success_remainder(miss, fail),
        LearningState::default(),
    ))
}

/// Size of the adjustment a learning event makes; zero for SUCCESS
pub fn learning_increment(knowledge: u32, outcome: Outcome) -> f64 {
    let weight = match outcome {
        Outcome::Fail => FAIL_WEIGHT,
        Outcome::Miss => MISS_WEIGHT,
        Outcome::Success => return 0.0,
    };
    let damping = (knowledge as f64 * KNOWLEDGE_DAMPING).min(MAX_DAMPING);
    weight * (BASE_STEP - damping)
}

pub fn update(
    probabilities: &ProbabilityState,
    state: &mut LearningState,
    outcome: Outcome,
) -> ProbabilityState {
    if outcome == Outcome::Success {
        return *probabilities;
    }

    let increment = learning_increment(state.knowledge, outcome);
    let miss = (probabilities.miss - MISS_STEP_FACTOR * increment).max(0.0);
    let fail = (probabilities.fail - increment).max(0.0);
    state.knowledge += 1;

    ProbabilityState::with_success_remainder(miss, fail)
}
