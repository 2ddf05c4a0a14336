use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid simulation outcome: {0}")]
    InvalidOutcome(String),

    #[error("Invalid SQL identifier: {0}")]
    InvalidIdentifier(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    SqliteError(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, DrillError>;
