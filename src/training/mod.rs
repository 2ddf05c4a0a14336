//! Phishing-training simulation
//!
//! Users of four behavioral archetypes go through repeated trials; each trial
//! draws SUCCESS, MISS or FAIL from the user's current probabilities and then
//! lets the archetype rule adjust them.

pub mod archetype;
pub mod organization;
pub mod outcome;
pub mod output;
pub mod probability;
pub mod result;
pub mod simulation;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use archetype::{Archetype, ArchetypeKind};
pub use organization::{ArchetypeMix, Organization, PopulationCounts};
pub use outcome::{resolve_draw, sample_outcome, Outcome};
pub use output::{TrainingOutput, TrainingStats};
pub use probability::ProbabilityState;
pub use result::{SimulationResult, RESULT_COLUMNS};
pub use simulation::simulate;
pub use user::UserModel;
