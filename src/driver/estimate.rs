//! Running win-likelihood estimate.

use serde::{Deserialize, Serialize};

/// Solve count and best score over the trials seen so far.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Trials recorded.
    pub trials: u32,

    /// Trials whose best score reached the win threshold.
    pub solved: u32,

    /// Highest best score over all trials.
    pub max_points: u32,

    /// Solvability of a random board in percent, for `lift`.
    pub baseline_pct: f64,
}

impl Estimate {
    /// Create an empty estimate.
    #[must_use]
    pub fn new(baseline_pct: f64) -> Self {
        Self {
            baseline_pct,
            ..Self::default()
        }
    }

    /// Record one trial's best score.
    pub fn record(&mut self, points: u32, solved: bool) {
        self.trials += 1;
        if solved {
            self.solved += 1;
        }
        self.max_points = self.max_points.max(points);
    }

    /// Percentage of trials solved.
    #[must_use]
    pub fn solvability_pct(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            100.0 * f64::from(self.solved) / f64::from(self.trials)
        }
    }

    /// Solvability relative to a random board.
    #[must_use]
    pub fn lift(&self) -> f64 {
        if self.baseline_pct <= 0.0 {
            0.0
        } else {
            self.solvability_pct() / self.baseline_pct
        }
    }
}
