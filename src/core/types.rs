//! Core type definitions used throughout the codebase

use std::fmt;

use chrono::NaiveDateTime;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::{Builder, Uuid};

use crate::core::error::{DrillError, Result};

/// Format used for every timestamp written to results and storage
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Unique identifier for simulated users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Build an id from the given random source so seeded runs stay reproducible
    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bytes: [u8; 16] = rng.gen();
        Self(Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

/// Rendered as 32 lowercase hex characters, no hyphens
impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map_err(|e| DrillError::InvalidConfig(format!("bad timestamp '{}': {}", text, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_user_id_is_reproducible_from_seed() {
        let a = UserId::from_rng(&mut ChaCha8Rng::seed_from_u64(7));
        let b = UserId::from_rng(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.to_string().len(), 32);
        assert!(!a.to_string().contains('-'));
    }

    #[test]
    fn test_timestamp_round_trip_format() {
        let ts = parse_timestamp("2024-03-01 08:30:00").unwrap();
        assert_eq!(format_timestamp(&ts), "2024-03-01 08:30:00");
        assert!(parse_timestamp("2024/03/01").is_err());
    }
}
