//! Archetype-specific behavior
//!
//! Each archetype lives in its own submodule with an `initialize` and an
//! `update` rule. `Archetype` is the closed set of variants and carries
//! whatever auxiliary state a rule needs between trials.

pub mod inactive;
pub mod learning;
pub mod savvy;
pub mod unmotivated;

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::{DrillError, Result};
use crate::training::outcome::{sample_outcome, Outcome};
use crate::training::probability::ProbabilityState;

pub use learning::LearningState;
pub use savvy::SavvyState;

/// Archetype tag, as written into result rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ArchetypeKind {
    Inactive,
    Unmotivated,
    Learning,
    Savvy,
}

impl ArchetypeKind {
    pub const ALL: [ArchetypeKind; 4] = [
        ArchetypeKind::Inactive,
        ArchetypeKind::Unmotivated,
        ArchetypeKind::Learning,
        ArchetypeKind::Savvy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArchetypeKind::Inactive => "Inactive",
            ArchetypeKind::Unmotivated => "Unmotivated",
            ArchetypeKind::Learning => "Learning",
            ArchetypeKind::Savvy => "Savvy",
        }
    }
}

impl fmt::Display for ArchetypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchetypeKind {
    type Err = DrillError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ArchetypeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DrillError::InvalidConfig(format!("unknown archetype '{}'", s)))
    }
}

/// A user's archetype together with its rule state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Archetype {
    Inactive,
    Unmotivated,
    Learning(LearningState),
    Savvy(SavvyState),
}

impl Archetype {
    /// Fresh archetype state plus its starting probabilities
    pub fn initialize<R: Rng + ?Sized>(kind: ArchetypeKind, rng: &mut R) -> Result<(Self, ProbabilityState)> {
        let initialized = match kind {
            ArchetypeKind::Inactive => (Archetype::Inactive, inactive::initialize()),
            ArchetypeKind::Unmotivated => (Archetype::Unmotivated, unmotivated::initialize(rng)),
            ArchetypeKind::Learning => {
                let (probabilities, state) = learning::initialize(rng)?;
                (Archetype::Learning(state), probabilities)
            }
            ArchetypeKind::Savvy => {
                let (probabilities, state) = savvy::initialize(rng);
                (Archetype::Savvy(state), probabilities)
            }
        };
        Ok(initialized)
    }

    pub fn kind(&self) -> ArchetypeKind {
        match self {
            Archetype::Inactive => ArchetypeKind::Inactive,
            Archetype::Unmotivated => ArchetypeKind::Unmotivated,
            Archetype::Learning(_) => ArchetypeKind::Learning,
            Archetype::Savvy(_) => ArchetypeKind::Savvy,
        }
    }

    /// Decide the next outcome. Inactive users never touch the random source.
    pub fn next_outcome<R: Rng + ?Sized>(&self, probabilities: &ProbabilityState, rng: &mut R) -> Outcome {
        match self {
            Archetype::Inactive => inactive::outcome(),
            _ => sample_outcome(probabilities, rng),
        }
    }

    /// Apply this archetype's rule for `outcome`, returning the new triple
    pub fn update(&mut self, probabilities: &ProbabilityState, outcome: Outcome) -> ProbabilityState {
        match self {
            Archetype::Inactive => *probabilities,
            Archetype::Unmotivated => unmotivated::update(probabilities, outcome),
            Archetype::Learning(state) => learning::update(probabilities, state, outcome),
            Archetype::Savvy(state) => savvy::update(probabilities, state, outcome),
        }
    }
}
