//! Training output and serialization

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::training::archetype::ArchetypeKind;
use crate::training::organization::Organization;
use crate::training::outcome::Outcome;
use crate::training::result::SimulationResult;

/// Complete training output
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainingOutput {
    pub results: Vec<SimulationResult>,
    pub statistics: TrainingStats,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrainingStats {
    pub n_users: u32,
    pub n_simulations: u32,
    pub training_interval_days: u32,
    pub seed: u64,
    pub simulation_time_ms: u64,
    pub total_results: usize,
    pub composition: BTreeMap<ArchetypeKind, usize>,
    pub outcome_totals: BTreeMap<Outcome, usize>,
}

impl TrainingOutput {
    pub fn new(organization: &Organization, seed: u64, elapsed: Duration) -> Self {
        let results = organization.aggregate_results();

        let mut outcome_totals: BTreeMap<Outcome, usize> =
            Outcome::ALL.iter().map(|&outcome| (outcome, 0)).collect();
        for row in &results {
            *outcome_totals.entry(row.outcome).or_insert(0) += 1;
        }

        Self {
            statistics: TrainingStats {
                n_users: organization.n_users,
                n_simulations: organization.n_simulations,
                training_interval_days: organization.training_interval_days,
                seed,
                simulation_time_ms: elapsed.as_millis() as u64,
                total_results: results.len(),
                composition: organization.composition(),
                outcome_totals,
            },
            results,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self)?)
    }

    pub fn summary(&self) -> String {
        let stats = &self.statistics;
        let total = |outcome: Outcome| stats.outcome_totals.get(&outcome).copied().unwrap_or(0);
        format!(
            "Trained {} users over {} trials in {}ms\n{} results: {} success, {} miss, {} fail",
            stats.n_users,
            stats.n_simulations,
            stats.simulation_time_ms,
            stats.total_results,
            total(Outcome::Success),
            total(Outcome::Miss),
            total(Outcome::Fail),
        )
    }
}
