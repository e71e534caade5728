//! Driver and whole-estimator configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::anneal::AnnealConfig;
use crate::cards::BACKLOG_CAPACITY;
use crate::core::{Error, Result, RulesConfig};

/// Monte-Carlo experiment configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Randomized deck completions to search.
    pub trials: u32,

    /// Seed of the deck-completion generator.
    pub setup_seed: u32,

    /// Seed of the search generator.
    pub search_seed: u32,

    /// Hidden cards dealt to tiers 1 and 2 when completing a board.
    pub backlog_target: usize,

    /// Solvability (percent) of a uniformly random board, the lift baseline.
    pub baseline_pct: f64,

    /// Run trials on a thread pool with per-trial seeds.
    pub parallel: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            trials: 50,
            setup_seed: 23_590_421,
            search_seed: 549_120_939,
            backlog_target: 25,
            baseline_pct: 3.7,
            parallel: false,
        }
    }
}

impl DriverConfig {
    /// Set the number of trials.
    #[must_use]
    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    /// Set both seeds.
    #[must_use]
    pub fn with_seeds(mut self, setup: u32, search: u32) -> Self {
        self.setup_seed = setup;
        self.search_seed = search;
        self
    }

    /// Enable or disable parallel trials.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.backlog_target > BACKLOG_CAPACITY {
            return Err(Error::Config(format!(
                "backlog_target must not exceed {BACKLOG_CAPACITY}"
            )));
        }
        if self.baseline_pct <= 0.0 {
            return Err(Error::Config("baseline_pct must be positive".into()));
        }
        Ok(())
    }
}

/// Everything the estimator needs, loadable from one JSON file.
///
/// Every field defaults, so a file only lists what it changes:
///
/// ```
/// use splendor_anneal::driver::EstimatorConfig;
///
/// let config = EstimatorConfig::from_json(r#"{ "driver": { "trials": 5 } }"#).unwrap();
/// assert_eq!(config.driver.trials, 5);
/// assert_eq!(config.anneal.steps, 200_000);
/// assert_eq!(config.rules.round_budget, 28);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub rules: RulesConfig,
    pub anneal: AnnealConfig,
    pub driver: DriverConfig,
}

impl EstimatorConfig {
    /// Parse and validate JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.rules.validate()?;
        self.anneal.validate()?;
        self.driver.validate()
    }
}
