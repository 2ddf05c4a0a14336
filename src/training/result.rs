//! Result rows produced by completed trials

use serde::{Deserialize, Serialize};

use crate::training::archetype::ArchetypeKind;
use crate::training::outcome::Outcome;

/// Column names of a result row, in storage order
pub const RESULT_COLUMNS: [&str; 5] = ["timestamp", "user_id", "name", "type", "outcome"];

/// One row per (user, trial)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    pub user_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub archetype_type: ArchetypeKind,
    pub outcome: Outcome,
}
