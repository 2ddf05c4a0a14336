pub mod config;
pub mod error;
pub mod names;
pub mod types;

pub use config::DrillConfig;
pub use error::{DrillError, Result};
pub use types::UserId;
