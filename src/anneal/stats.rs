//! Annealing statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected across annealing runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Annealing steps performed.
    pub steps: u64,

    /// Steps whose candidate became the incumbent.
    pub accepted: u64,

    /// Strict improvements of the best-ever score.
    pub improvements: u64,

    /// Mutation attempts, failed ones included.
    pub mutation_attempts: u64,

    /// Steps that hit the retry cap and used the fallback mutation.
    pub fallbacks: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add another run's counters.
    pub fn merge(&mut self, other: &SearchStats) {
        self.steps += other.steps;
        self.accepted += other.accepted;
        self.improvements += other.improvements;
        self.mutation_attempts += other.mutation_attempts;
        self.fallbacks += other.fallbacks;
        self.time_us += other.time_us;
    }

    /// Calculate steps per second.
    #[must_use]
    pub fn steps_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.steps as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of steps accepted.
    #[must_use]
    pub fn acceptance_rate(&self) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            self.accepted as f64 / self.steps as f64
        }
    }
}
