//! Inactive users - stale or disengaged records that never react

use crate::training::outcome::Outcome;
use crate::training::probability::ProbabilityState;

pub fn initialize() -> ProbabilityState {
    ProbabilityState::certain_miss()
}

/// No sampling: an inactive mailbox never opens anything
pub fn outcome() -> Outcome {
    Outcome::Miss
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_is_certain_miss() {
        let probabilities = initialize();
        assert_eq!((probabilities.success, probabilities.miss, probabilities.fail), (0.0, 1.0, 0.0));
        assert_eq!(outcome(), Outcome::Miss);
    }
}
