//! Game rule configuration.
//!
//! These values encode the challenge's rules rather than tuning knobs:
//! - Token economy: four of one color, twelve in total, four re-earned a round
//! - Budget: 28 rounds to reach 31 points
//!
//! Defaults reproduce the challenge exactly. Changing them answers a
//! different question.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Rule constants consulted by decks and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Largest per-color shortfall payable with tokens.
    pub color_deficit_cap: u32,

    /// Largest total shortfall payable with tokens (token supply).
    pub token_cap: u32,

    /// Tokens regained per round spent collecting.
    pub tokens_per_round: u32,

    /// Rounds available to reach the target.
    pub round_budget: u32,

    /// Points needed for a win.
    pub win_threshold: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            color_deficit_cap: 4,
            token_cap: 12,
            tokens_per_round: 4,
            round_budget: 28,
            win_threshold: 31,
        }
    }
}

impl RulesConfig {
    /// Set the round budget.
    #[must_use]
    pub fn with_round_budget(mut self, rounds: u32) -> Self {
        self.round_budget = rounds;
        self
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_win_threshold(mut self, points: u32) -> Self {
        self.win_threshold = points;
        self
    }

    /// Rounds needed to re-earn `tokens` spent tokens.
    #[must_use]
    pub fn recovery_rounds(&self, tokens: u32) -> u32 {
        tokens.div_ceil(self.tokens_per_round)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.tokens_per_round == 0 {
            return Err(Error::Config("tokens_per_round must be positive".into()));
        }
        if self.win_threshold == 0 {
            return Err(Error::Config("win_threshold must be positive".into()));
        }
        Ok(())
    }
}
