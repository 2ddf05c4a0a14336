//! Run configuration with documented defaults
//!
//! A config can be built from defaults, loaded from a TOML file, and then
//! overridden field by field from the command line.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::error::{DrillError, Result};
use crate::core::types::parse_timestamp;
use crate::report::query::is_plain_identifier;

pub const DEFAULT_N_USERS: u32 = 100;
pub const DEFAULT_N_SIMULATIONS: u32 = 50;
pub const DEFAULT_TRAINING_INTERVAL_DAYS: u32 = 7;
pub const DEFAULT_TABLE: &str = "training_result";
pub const DEFAULT_DATABASE: &str = "training.db";
pub const DEFAULT_CSV_PATH: &str = "visualize.csv";

/// Configuration for one training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillConfig {
    /// Number of simulated users in the organization
    pub n_users: u32,

    /// Number of trials every user completes
    pub n_simulations: u32,

    /// Simulated days between two consecutive trials
    ///
    /// Must be at least 1 so each user's timestamps strictly increase.
    pub training_interval_days: u32,

    /// Seed for the ChaCha8 random source. `None` draws a fresh seed.
    pub seed: Option<u64>,

    /// Anchor for trial timestamps (`YYYY-MM-DD HH:MM:SS`). `None` uses the wall clock.
    pub start: Option<String>,

    // === STORAGE ===
    /// Table the results are written into
    pub table: String,

    /// SQLite database file
    pub database: PathBuf,

    /// Destination for the daily breakdown CSV
    pub csv_path: PathBuf,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            n_users: DEFAULT_N_USERS,
            n_simulations: DEFAULT_N_SIMULATIONS,
            training_interval_days: DEFAULT_TRAINING_INTERVAL_DAYS,
            seed: None,
            start: None,
            table: DEFAULT_TABLE.to_string(),
            database: PathBuf::from(DEFAULT_DATABASE),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
        }
    }
}

impl DrillConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file; missing keys fall back to defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: DrillConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parsed start anchor, if one was configured
    pub fn start_time(&self) -> Result<Option<NaiveDateTime>> {
        self.start.as_deref().map(parse_timestamp).transpose()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.n_users == 0 {
            return Err(DrillError::InvalidConfig("n_users must be positive".into()));
        }
        if self.n_simulations == 0 {
            return Err(DrillError::InvalidConfig("n_simulations must be positive".into()));
        }
        if self.training_interval_days == 0 {
            return Err(DrillError::InvalidConfig(
                "training_interval_days must be at least 1".into(),
            ));
        }
        if !is_plain_identifier(&self.table) {
            return Err(DrillError::InvalidIdentifier(self.table.clone()));
        }
        self.start_time()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DrillConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.n_users, 100);
        assert_eq!(config.n_simulations, 50);
        assert_eq!(config.training_interval_days, 7);
        assert_eq!(config.table, "training_result");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = DrillConfig::from_toml(
            r#"
            n_users = 10
            seed = 42
            start = "2024-01-01 09:00:00"
            "#,
        )
        .unwrap();
        assert_eq!(config.n_users, 10);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.n_simulations, DEFAULT_N_SIMULATIONS);
        assert!(config.start_time().unwrap().is_some());
    }

    #[test]
    fn test_rejects_zero_counts() {
        let config = DrillConfig { n_users: 0, ..DrillConfig::default() };
        assert!(matches!(config.validate(), Err(DrillError::InvalidConfig(_))));

        let config = DrillConfig { training_interval_days: 0, ..DrillConfig::default() };
        assert!(matches!(config.validate(), Err(DrillError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_unsafe_table_name() {
        let config = DrillConfig {
            table: "results; DROP TABLE x".into(),
            ..DrillConfig::default()
        };
        assert!(matches!(config.validate(), Err(DrillError::InvalidIdentifier(_))));
    }

    #[test]
    fn test_shipped_config_parses() {
        let config = DrillConfig::load(Path::new("config/drill.toml")).unwrap();
        assert_eq!(config, DrillConfig::default());
    }

    #[test]
    fn test_rejects_malformed_start() {
        let config = DrillConfig {
            start: Some("yesterday".into()),
            ..DrillConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
