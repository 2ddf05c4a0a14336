//! Organization - a fixed population of users trained in lockstep

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use tracing::{debug, info};

use crate::core::config::DrillConfig;
use crate::core::error::{DrillError, Result};
use crate::training::archetype::ArchetypeKind;
use crate::training::result::SimulationResult;
use crate::training::user::UserModel;

/// Percentage split of the population. Learning takes whatever is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeMix {
    pub inactive_pct: u32,
    pub unmotivated_pct: u32,
    pub savvy_pct: u32,
}

impl ArchetypeMix {
    pub const STANDARD: ArchetypeMix = ArchetypeMix {
        inactive_pct: 3,
        unmotivated_pct: 15,
        savvy_pct: 10,
    };

    /// Per-archetype counts for `n_users`, truncating each percentage share
    pub fn counts(&self, n_users: u32) -> PopulationCounts {
        let share = |pct: u32| (u64::from(n_users) * u64::from(pct) / 100) as u32;
        let inactive = share(self.inactive_pct);
        let unmotivated = share(self.unmotivated_pct);
        let savvy = share(self.savvy_pct);

        PopulationCounts {
            inactive,
            unmotivated,
            savvy,
            learning: n_users - inactive - unmotivated - savvy,
        }
    }
}

impl Default for ArchetypeMix {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulationCounts {
    pub inactive: u32,
    pub unmotivated: u32,
    pub savvy: u32,
    pub learning: u32,
}

impl PopulationCounts {
    /// Construction order: Inactive, Unmotivated, Savvy, Learning
    pub fn in_construction_order(&self) -> [(ArchetypeKind, u32); 4] {
        [
            (ArchetypeKind::Inactive, self.inactive),
            (ArchetypeKind::Unmotivated, self.unmotivated),
            (ArchetypeKind::Savvy, self.savvy),
            (ArchetypeKind::Learning, self.learning),
        ]
    }
}

pub struct Organization {
    pub n_users: u32,
    pub n_simulations: u32,
    pub training_interval_days: u32,
    /// Timestamp of the first trial
    pub start: NaiveDateTime,
    users: Vec<UserModel>,
}

impl Organization {
    /// Populate an organization with the standard archetype mix
    pub fn new<R: Rng + ?Sized>(
        n_users: u32,
        n_simulations: u32,
        training_interval_days: u32,
        start: NaiveDateTime,
        rng: &mut R,
    ) -> Result<Self> {
        if n_users == 0 || n_simulations == 0 || training_interval_days == 0 {
            return Err(DrillError::InvalidConfig(format!(
                "organization needs positive sizes, got n_users={}, n_simulations={}, training_interval_days={}",
                n_users, n_simulations, training_interval_days
            )));
        }

        let mut organization = Self {
            n_users,
            n_simulations,
            training_interval_days,
            start,
            users: Vec::with_capacity(n_users as usize),
        };
        // Reject runs whose last day cannot be represented before any user is built
        organization.trial_timestamp(n_simulations - 1)?;
        organization.populate(ArchetypeMix::STANDARD, rng)?;

        info!("Organization created: {}", organization);
        Ok(organization)
    }

    /// Build from a validated config, anchoring at `config.start` or the wall clock
    pub fn from_config<R: Rng + ?Sized>(config: &DrillConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let start = match config.start_time()? {
            Some(start) => start,
            None => chrono::Local::now().naive_local(),
        };
        Self::new(
            config.n_users,
            config.n_simulations,
            config.training_interval_days,
            start,
            rng,
        )
    }

    fn populate<R: Rng + ?Sized>(&mut self, mix: ArchetypeMix, rng: &mut R) -> Result<()> {
        let counts = mix.counts(self.n_users);
        for (kind, count) in counts.in_construction_order() {
            for _ in 0..count {
                self.users.push(UserModel::spawn(kind, rng)?);
            }
        }
        Ok(())
    }

    /// Simulated time of trial `index`
    pub fn trial_timestamp(&self, index: u32) -> Result<NaiveDateTime> {
        let offset = i64::from(self.training_interval_days) * i64::from(index);
        Duration::try_days(offset)
            .and_then(|delta| self.start.checked_add_signed(delta))
            .ok_or_else(|| DrillError::InvalidConfig(format!("trial {} falls outside the calendar", index)))
    }

    /// Every user completes one trial per simulated day, all in lockstep
    pub fn run_training<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        for index in 0..self.n_simulations {
            let timestamp = self.trial_timestamp(index)?;
            for user in &mut self.users {
                user.complete_trial(timestamp, rng);
            }
            debug!("Completed trial {}/{} at {}", index + 1, self.n_simulations, timestamp);
        }
        info!("Organization has completed {} trials per user", self.n_simulations);
        Ok(())
    }

    /// All users' histories concatenated in population order
    pub fn aggregate_results(&self) -> Vec<SimulationResult> {
        self.users
            .iter()
            .flat_map(|user| user.history().iter().cloned())
            .collect()
    }

    pub fn users(&self) -> &[UserModel] {
        &self.users
    }

    pub fn composition(&self) -> BTreeMap<ArchetypeKind, usize> {
        let mut composition: BTreeMap<ArchetypeKind, usize> =
            ArchetypeKind::ALL.iter().map(|&kind| (kind, 0)).collect();
        for user in &self.users {
            *composition.entry(user.kind()).or_insert(0) += 1;
        }
        composition
    }

    /// Most frequent display name; ties go to the name seen first
    pub fn most_common_name(&self) -> Option<(&str, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for user in &self.users {
            let count = counts.entry(user.name.as_str()).or_insert(0);
            if *count == 0 {
                order.push(user.name.as_str());
            }
            *count += 1;
        }

        let mut best: Option<(&str, usize)> = None;
        for name in order {
            let count = counts[name];
            if best.map_or(true, |(_, top)| count > top) {
                best = Some((name, count));
            }
        }
        best
    }
}

impl fmt::Display for Organization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Organization(n_users={}, n_simulations={}, training_interval_days={}",
            self.n_users, self.n_simulations, self.training_interval_days
        )?;
        if let Some((name, count)) = self.most_common_name() {
            write!(f, ", most_common_name={} x{}", name, count)?;
        }
        write!(f, ")")
    }
}
