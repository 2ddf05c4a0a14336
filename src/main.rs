//! Phishing Drill - Entry Point
//!
//! Trains a simulated organization, stores every trial result in SQLite,
//! queries the per-day outcome breakdown back and exports it as CSV.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use phishing_drill::core::config::DrillConfig;
use phishing_drill::core::error::Result;
use phishing_drill::report::{export_breakdown, ResultStore};
use phishing_drill::training::simulate;

/// Simulate phishing-training trials for an organization
#[derive(Parser, Debug)]
#[command(name = "phishing-drill")]
#[command(about = "Simulate an organization going through phishing-training trials")]
struct Args {
    /// TOML config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of users in the organization
    #[arg(long)]
    users: Option<u32>,

    /// Trials per user
    #[arg(long)]
    simulations: Option<u32>,

    /// Days between trials
    #[arg(long)]
    interval_days: Option<u32>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// First trial timestamp, `YYYY-MM-DD HH:MM:SS`
    #[arg(long)]
    start: Option<String>,

    /// Result table name
    #[arg(long)]
    table: Option<String>,

    /// SQLite database file
    #[arg(long)]
    database: Option<PathBuf>,

    /// CSV output for the daily breakdown
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Also dump the full output as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<(DrillConfig, Option<PathBuf>)> {
        let mut config = match &self.config {
            Some(path) => DrillConfig::load(path)?,
            None => DrillConfig::default(),
        };

        if let Some(users) = self.users {
            config.n_users = users;
        }
        if let Some(simulations) = self.simulations {
            config.n_simulations = simulations;
        }
        if let Some(days) = self.interval_days {
            config.training_interval_days = days;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.start.is_some() {
            config.start = self.start;
        }
        if let Some(table) = self.table {
            config.table = table;
        }
        if let Some(database) = self.database {
            config.database = database;
        }
        if let Some(csv) = self.csv {
            config.csv_path = csv;
        }

        config.validate()?;
        Ok((config, self.json))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("phishing_drill=info")),
        )
        .init();

    let (config, json_path) = Args::parse().into_config()?;

    let output = simulate(&config)?;
    tracing::info!("{}", output.summary());

    let mut store = ResultStore::open(&config.database)?;
    store.replace_results(&config.table, &output.results)?;
    tracing::info!("Training results successfully uploaded to the database");

    let breakdown = store.daily_breakdown(&config.table)?;
    tracing::info!("Aggregated training results have been fetched from the db");
    export_breakdown(&config.csv_path, &breakdown)?;

    if let Some(path) = json_path {
        std::fs::write(&path, output.to_json()?)?;
        tracing::info!("Full output written to {}", path.display());
    }

    Ok(())
}
