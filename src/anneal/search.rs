//! Randomized-restart simulated annealing over move sequences.
//!
//! One run starts from an empty incumbent and, while the temperature is
//! above its floor:
//!
//! 1. Copies the incumbent's moves and applies one mutation
//! 2. Replays the candidate against the completed board
//! 3. Offers the result to the best-state accumulator
//! 4. Accepts it as the new incumbent with probability
//!    `min(1, exp(delta_points / temperature))`
//! 5. Cools the temperature geometrically
//!
//! A deck completion is searched `restarts` times; the accumulator keeps the
//! best result across all of them.

use std::time::Instant;

use tracing::{debug, trace};

use super::config::AnnealConfig;
use super::mutation::mutate;
use super::stats::SearchStats;
use crate::core::{Result, RulesConfig, Twister};
use crate::game::{Board, GameState};

/// Best result seen for one deck completion.
///
/// Owned by the caller and passed into the search; start a fresh one (or
/// `reset`) for every completion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BestState {
    best: GameState,
    first_win: Option<GameState>,
}

impl BestState {
    /// Create an empty accumulator (zero points).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record `state` if it strictly beats the current best. Returns whether
    /// it did.
    pub fn offer(&mut self, state: &GameState, rules: &RulesConfig) -> bool {
        if state.points() <= self.best.points() {
            return false;
        }
        self.best = state.clone();
        if self.first_win.is_none() && state.is_win(rules) {
            self.first_win = Some(state.clone());
        }
        true
    }

    /// Highest-scoring state seen.
    #[must_use]
    pub fn best(&self) -> &GameState {
        &self.best
    }

    /// Best score seen.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.best.points()
    }

    /// First state that reached the win threshold, if any did.
    #[must_use]
    pub fn first_win(&self) -> Option<&GameState> {
        self.first_win.as_ref()
    }

    /// Check if the win threshold was reached.
    #[must_use]
    pub fn is_win(&self, rules: &RulesConfig) -> bool {
        self.best.is_win(rules)
    }

    /// Consume into (best, first win).
    #[must_use]
    pub fn into_parts(self) -> (GameState, Option<GameState>) {
        (self.best, self.first_win)
    }
}

/// Simulated-annealing search context.
///
/// Borrows the rules and schedule; owns its statistics.
pub struct Annealer<'a> {
    rules: &'a RulesConfig,
    config: &'a AnnealConfig,
    stats: SearchStats,
}

impl<'a> Annealer<'a> {
    /// Create a search context.
    ///
    /// Fails if `config` does not validate; a token range below two would
    /// leave CHANGE without a different token to draw.
    pub fn new(rules: &'a RulesConfig, config: &'a AnnealConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            rules,
            config,
            stats: SearchStats::default(),
        })
    }

    /// Search one completed board `restarts` times.
    pub fn search(&mut self, board: &Board, best: &mut BestState, rng: &mut Twister) {
        let start = Instant::now();
        for restart in 0..self.config.restarts {
            self.run(board, best, rng);
            trace!(restart, best = best.points(), "annealing run finished");
        }
        self.stats.time_us += start.elapsed().as_micros() as u64;
    }

    /// One annealing run from an empty incumbent.
    pub fn run(&mut self, board: &Board, best: &mut BestState, rng: &mut Twister) {
        let cooldown = self.config.cooldown();
        let mut temperature = self.config.start_temperature;
        let mut incumbent = GameState::new();

        while temperature > self.config.final_temperature {
            let mut candidate = incumbent.moves().clone();
            mutate(&mut candidate, rng, self.config, &mut self.stats);

            let refined = GameState::replay(&candidate, board, self.rules);

            if best.offer(&refined, self.rules) {
                self.stats.improvements += 1;
                debug!(
                    points = refined.points(),
                    rounds = refined.rounds(),
                    tokens = refined.tokens_cost(),
                    "new best"
                );
            }

            let delta = f64::from(refined.points()) - f64::from(incumbent.points());
            if (delta / temperature).exp() > rng.next_unit() {
                incumbent = refined;
                self.stats.accepted += 1;
            }

            temperature *= cooldown;
            self.stats.steps += 1;
        }
    }

    /// Statistics accumulated so far.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Consume into statistics.
    #[must_use]
    pub fn into_stats(self) -> SearchStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Color, Tier};
    use crate::core::Error;
    use crate::game::Sequence;

    fn small_config() -> AnnealConfig {
        AnnealConfig::default().with_steps(2_000).with_restarts(2)
    }

    fn free_board() -> Board {
        let mut board = Board::new();
        for value in 1..=8 {
            board
                .deck_mut(Tier::Two)
                .add_card(Card::new([0, 0, 0, 0, 0], Color::Blue, value))
                .unwrap();
        }
        board
    }

    #[test]
    fn test_best_state_strict_improvement() {
        let rules = RulesConfig::default();
        let board = free_board();
        let one = GameState::replay(&Sequence::from_tokens(&[4]).unwrap(), &board, &rules);
        let same = GameState::replay(&Sequence::from_tokens(&[4, 12]).unwrap(), &board, &rules);

        let mut best = BestState::new();
        assert!(best.offer(&one, &rules));
        assert!(!best.offer(&same, &rules));
        assert!(!best.offer(&GameState::new(), &rules));
        assert_eq!(best.points(), 1);
        assert!(best.first_win().is_none());

        best.reset();
        assert_eq!(best.points(), 0);
    }

    #[test]
    fn test_best_state_keeps_first_win() {
        let rules = RulesConfig::default().with_win_threshold(3);
        let board = free_board();
        let first = GameState::replay(&Sequence::from_tokens(&[6]).unwrap(), &board, &rules);
        let better = GameState::replay(&Sequence::from_tokens(&[6, 7]).unwrap(), &board, &rules);

        let mut best = BestState::new();
        best.offer(&first, &rules);
        best.offer(&better, &rules);

        assert_eq!(best.first_win(), Some(&first));
        assert_eq!(best.best(), &better);
        assert!(best.is_win(&rules));
    }

    #[test]
    fn test_run_step_count_matches_schedule() {
        let rules = RulesConfig::default();
        let config = small_config();
        let mut annealer = Annealer::new(&rules, &config).unwrap();
        let mut best = BestState::new();

        annealer.run(&free_board(), &mut best, &mut Twister::new(1));

        let steps = annealer.stats().steps;
        assert!((1_999..=2_001).contains(&steps), "steps = {steps}");
    }

    #[test]
    fn test_search_finds_free_points() {
        let rules = RulesConfig::default();
        let config = small_config();
        let mut annealer = Annealer::new(&rules, &config).unwrap();
        let mut best = BestState::new();

        annealer.search(&free_board(), &mut best, &mut Twister::new(2));

        // Eight free cards worth 1..=8 (36 in total) behind slots 4..=7.
        assert!((31..=36).contains(&best.points()));
        assert!(best.is_win(&rules));
        assert!(annealer.stats().improvements > 0);
    }

    #[test]
    fn test_search_is_deterministic() {
        let rules = RulesConfig::default();
        let config = small_config();
        let board = free_board();

        let mut a = BestState::new();
        let mut b = BestState::new();
        Annealer::new(&rules, &config).unwrap().search(&board, &mut a, &mut Twister::new(9));
        Annealer::new(&rules, &config).unwrap().search(&board, &mut b, &mut Twister::new(9));

        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_degenerate_token_range() {
        let rules = RulesConfig::default();
        for token_range in [0, 1] {
            let config = AnnealConfig {
                token_range,
                ..small_config()
            };
            let err = Annealer::new(&rules, &config).err();
            assert!(matches!(err, Some(Error::Config(_))), "token_range = {token_range}");
        }
    }

    #[test]
    fn test_best_never_decreases_across_runs() {
        let rules = RulesConfig::default();
        let config = small_config().with_restarts(1);
        let board = free_board();
        let mut annealer = Annealer::new(&rules, &config).unwrap();
        let mut rng = Twister::new(12);
        let mut best = BestState::new();

        let mut history = Vec::new();
        for _ in 0..8 {
            annealer.search(&board, &mut best, &mut rng);
            history.push(best.points());
        }

        assert!(history.windows(2).all(|w| w[0] <= w[1]), "{history:?}");
        // Each improvement raises the best by at least one point.
        assert!(annealer.stats().improvements <= u64::from(best.points()));
    }
}
