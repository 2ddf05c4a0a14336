//! Simulated user: identity, current probabilities and trial history

use std::fmt;

use chrono::NaiveDateTime;
use rand::Rng;

use crate::core::error::Result;
use crate::core::names::random_first_name;
use crate::core::types::{format_timestamp, UserId};
use crate::training::archetype::{Archetype, ArchetypeKind};
use crate::training::outcome::Outcome;
use crate::training::probability::ProbabilityState;
use crate::training::result::SimulationResult;

#[derive(Debug, Clone)]
pub struct UserModel {
    pub id: UserId,
    pub name: String,
    archetype: Archetype,
    probabilities: ProbabilityState,
    history: Vec<SimulationResult>,
}

impl UserModel {
    /// User with explicit starting state
    pub fn new(id: UserId, name: String, archetype: Archetype, probabilities: ProbabilityState) -> Self {
        Self {
            id,
            name,
            archetype,
            probabilities,
            history: Vec::new(),
        }
    }

    /// Fresh user of `kind`; identity, name and starting probabilities all come from `rng`
    pub fn spawn<R: Rng + ?Sized>(kind: ArchetypeKind, rng: &mut R) -> Result<Self> {
        let id = UserId::from_rng(rng);
        let name = random_first_name(rng);
        let (archetype, probabilities) = Archetype::initialize(kind, rng)?;
        Ok(Self::new(id, name, archetype, probabilities))
    }

    /// Run one trial at `timestamp`: draw an outcome, then record it
    pub fn complete_trial<R: Rng + ?Sized>(&mut self, timestamp: NaiveDateTime, rng: &mut R) -> Outcome {
        let outcome = self.archetype.next_outcome(&self.probabilities, rng);
        self.record_outcome(timestamp, outcome);
        outcome
    }

    /// Apply the archetype rule for an already-decided outcome and append it to history
    pub fn record_outcome(&mut self, timestamp: NaiveDateTime, outcome: Outcome) {
        self.probabilities = self.archetype.update(&self.probabilities, outcome);
        assert!(
            self.probabilities.is_normalized(),
            "{} rule broke the distribution: {:?}",
            self.archetype.kind(),
            self.probabilities
        );

        self.history.push(SimulationResult {
            timestamp: format_timestamp(&timestamp),
            user_id: self.id.to_string(),
            name: self.name.clone(),
            archetype_type: self.archetype.kind(),
            outcome,
        });
    }

    pub fn kind(&self) -> ArchetypeKind {
        self.archetype.kind()
    }

    pub fn archetype(&self) -> &Archetype {
        &self.archetype
    }

    pub fn probabilities(&self) -> &ProbabilityState {
        &self.probabilities
    }

    pub fn history(&self) -> &[SimulationResult] {
        &self.history
    }

    pub fn trial_count(&self) -> usize {
        self.history.len()
    }
}

impl fmt::Display for UserModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User(id={}, name={}, type={}, simulations_completed={})",
            self.id,
            self.name,
            self.kind(),
            self.trial_count()
        )
    }
}
