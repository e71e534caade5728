//! Text rendering of progress and solutions.

use std::fmt;

use crate::core::RulesConfig;
use crate::driver::Estimate;
use crate::game::GameState;

/// Overwritable progress line for the running estimate.
///
/// Starts with a carriage return and has no trailing newline.
pub struct ProgressLine<'a>(pub &'a Estimate);

impl fmt::Display for ProgressLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let estimate = self.0;
        write!(
            f,
            "\rIter {}, Maximum: {}, Solvability likelihood: {:.2} %, lift vs random board {:.2}",
            estimate.trials,
            estimate.max_points,
            estimate.solvability_pct(),
            estimate.lift()
        )
    }
}

/// Summary and move-by-move listing of a solution.
pub struct SolutionDump<'a> {
    pub state: &'a GameState,
    pub rules: &'a RulesConfig,
}

impl<'a> SolutionDump<'a> {
    pub fn new(state: &'a GameState, rules: &'a RulesConfig) -> Self {
        Self { state, rules }
    }
}

impl fmt::Display for SolutionDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state;
        writeln!(f)?;
        writeln!(
            f,
            "points: {}, rounds: {}, tokens_cost: {}, cc {}",
            state.points(),
            state.rounds(),
            state.tokens_cost(),
            state.recovery_rounds(self.rules)
        )?;
        for (mv, card) in state.purchases() {
            writeln!(f, "{mv}: {card}")?;
        }
        write!(f, "\n\n")
    }
}
