//! Trial outcomes and the sampler that draws them

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::DrillError;
use crate::training::probability::{round3, ProbabilityState};

/// Result of one phishing-training trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// Reported the simulated phish
    Success,
    /// Ignored it
    Miss,
    /// Fell for it
    Fail,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::Success, Outcome::Miss, Outcome::Fail];

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "SUCCESS",
            Outcome::Miss => "MISS",
            Outcome::Fail => "FAIL",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUCCESS" => Ok(Outcome::Success),
            "MISS" => Ok(Outcome::Miss),
            "FAIL" => Ok(Outcome::Fail),
            other => Err(DrillError::InvalidOutcome(other.to_string())),
        }
    }
}

/// Largest draw the sampler produces; keeps rounded draws inside [0, 1)
const MAX_DRAW: f64 = 0.999;

/// Draw one outcome from the triple, consuming one value from `rng`
pub fn sample_outcome<R: Rng + ?Sized>(probabilities: &ProbabilityState, rng: &mut R) -> Outcome {
    let draw = round3(rng.gen::<f64>()).min(MAX_DRAW);
    resolve_draw(probabilities, draw)
}

/// Map a draw in [0, 1) onto an outcome bucket
///
/// Bucket order is SUCCESS, then FAIL, then MISS. Anything not caught by the
/// first two falls through to MISS, including every draw against an all-zero
/// triple.
pub fn resolve_draw(probabilities: &ProbabilityState, draw: f64) -> Outcome {
    if draw < probabilities.success {
        Outcome::Success
    } else if draw < probabilities.success + probabilities.fail {
        Outcome::Fail
    } else {
        Outcome::Miss
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_bucket_order_is_success_fail_miss() {
        let probs = ProbabilityState::new(0.2, 0.5, 0.3);
        assert_eq!(resolve_draw(&probs, 0.0), Outcome::Success);
        assert_eq!(resolve_draw(&probs, 0.199), Outcome::Success);
        assert_eq!(resolve_draw(&probs, 0.2), Outcome::Fail);
        assert_eq!(resolve_draw(&probs, 0.499), Outcome::Fail);
        assert_eq!(resolve_draw(&probs, 0.5), Outcome::Miss);
        assert_eq!(resolve_draw(&probs, 0.999), Outcome::Miss);
    }

    #[test]
    fn test_all_zero_triple_resolves_to_miss() {
        let probs = ProbabilityState::new(0.0, 0.0, 0.0);
        for draw in [0.0, 0.001, 0.5, 0.999] {
            assert_eq!(resolve_draw(&probs, draw), Outcome::Miss);
        }
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(sample_outcome(&probs, &mut rng), Outcome::Miss);
        }
    }

    #[test]
    fn test_certain_outcomes() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let always_fail = ProbabilityState::new(0.0, 0.0, 1.0);
        let always_success = ProbabilityState::new(1.0, 0.0, 0.0);
        for _ in 0..100 {
            assert_eq!(sample_outcome(&always_fail, &mut rng), Outcome::Fail);
            assert_eq!(sample_outcome(&always_success, &mut rng), Outcome::Success);
        }
    }

    #[test]
    fn test_outcome_tags_parse_strictly() {
        for outcome in Outcome::ALL {
            assert_eq!(outcome.as_str().parse::<Outcome>().unwrap(), outcome);
        }
        assert!(matches!("success".parse::<Outcome>(), Err(DrillError::InvalidOutcome(_))));
        assert!("PASS".parse::<Outcome>().is_err());
    }

    #[test]
    fn test_serializes_as_tag() {
        assert_eq!(serde_json::to_string(&Outcome::Fail).unwrap(), "\"FAIL\"");
    }
}
