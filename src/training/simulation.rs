//! Full training run: build the organization, train it, collect the rows

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::core::config::DrillConfig;
use crate::core::error::Result;
use crate::training::organization::Organization;
use crate::training::output::TrainingOutput;

/// Run a training simulation for `config`
///
/// The whole run draws from one ChaCha8 stream, so a fixed `seed` together
/// with a fixed `start` reproduces the output exactly.
pub fn simulate(config: &DrillConfig) -> Result<TrainingOutput> {
    let start = std::time::Instant::now();

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    info!("Seeding training run with {}", seed);

    let mut organization = Organization::from_config(config, &mut rng)?;
    organization.run_training(&mut rng)?;

    Ok(TrainingOutput::new(&organization, seed, start.elapsed()))
}
