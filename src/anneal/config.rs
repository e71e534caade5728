//! Annealing schedule and mutation parameters.

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::game::SEQUENCE_CAPACITY;

/// Simulated-annealing configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealConfig {
    /// Temperature of the first step.
    pub start_temperature: f64,

    /// The run stops once the temperature drops to this value.
    pub final_temperature: f64,

    /// Steps of geometric cooldown from start to final temperature.
    pub steps: u32,

    /// Independent runs per deck completion, each from an empty sequence.
    pub restarts: u32,

    /// Generated tokens are drawn from `0..token_range`.
    ///
    /// Ten covers tiers 1 and 2 and the first two tier-3 slots.
    pub token_range: u8,

    /// INSERT is refused once a sequence is longer than this.
    pub insert_limit: usize,

    /// Failed mutation attempts per step before falling back to a mutation
    /// that always applies.
    pub mutation_retry_limit: u32,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            start_temperature: 2.0,
            final_temperature: 0.1,
            steps: 200_000,
            restarts: 10,
            token_range: 10,
            insert_limit: 30,
            mutation_retry_limit: 1_000,
        }
    }
}

impl AnnealConfig {
    /// Set the number of cooldown steps.
    #[must_use]
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Set the number of restarts per completion.
    #[must_use]
    pub fn with_restarts(mut self, restarts: u32) -> Self {
        self.restarts = restarts;
        self
    }

    /// Set the temperature range.
    #[must_use]
    pub fn with_temperatures(mut self, start: f64, end: f64) -> Self {
        self.start_temperature = start;
        self.final_temperature = end;
        self
    }

    /// Per-step temperature multiplier: `(final / start)^(1 / steps)`.
    #[must_use]
    pub fn cooldown(&self) -> f64 {
        (self.final_temperature / self.start_temperature).powf(1.0 / f64::from(self.steps))
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<()> {
        if !(self.final_temperature > 0.0 && self.start_temperature > self.final_temperature) {
            return Err(Error::Config(
                "temperatures must satisfy start > final > 0".into(),
            ));
        }
        if self.steps == 0 {
            return Err(Error::Config("steps must be positive".into()));
        }
        if self.token_range < 2 {
            return Err(Error::Config("token_range must be at least 2".into()));
        }
        if self.insert_limit >= SEQUENCE_CAPACITY {
            return Err(Error::Config(format!(
                "insert_limit must be below the sequence capacity ({SEQUENCE_CAPACITY})"
            )));
        }
        Ok(())
    }
}
