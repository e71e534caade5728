//! Outer Monte-Carlo loop: complete the hidden decks, search, tally.

use rayon::prelude::*;
use tracing::{debug, info};

use super::config::DriverConfig;
use super::estimate::Estimate;
use crate::anneal::{AnnealConfig, Annealer, BestState, SearchStats};
use crate::cards::Catalogue;
use crate::core::{Result, RulesConfig, Twister};
use crate::game::{Board, GameState};

/// What one trial produced, plus the running estimate after it.
#[derive(Clone, Debug)]
pub struct TrialReport {
    /// Zero-based trial index.
    pub index: u32,

    /// Best state found for this completion.
    pub best: GameState,

    /// First state that reached the win threshold, if any.
    pub first_win: Option<GameState>,

    /// Estimate over trials `0..=index`.
    pub estimate: Estimate,

    /// Search counters for this trial.
    pub stats: SearchStats,
}

/// Result of a single completion-and-search.
struct TrialOutcome {
    best: BestState,
    stats: SearchStats,
}

/// Monte-Carlo win-likelihood estimator.
///
/// The canonical board and catalogue are only read; every trial searches
/// its own completed copy.
pub struct MonteCarloDriver<'a> {
    catalogue: &'a Catalogue,
    rules: &'a RulesConfig,
    anneal: &'a AnnealConfig,
    config: &'a DriverConfig,
}

impl<'a> MonteCarloDriver<'a> {
    /// Create a driver.
    pub fn new(
        catalogue: &'a Catalogue,
        rules: &'a RulesConfig,
        anneal: &'a AnnealConfig,
        config: &'a DriverConfig,
    ) -> Self {
        Self {
            catalogue,
            rules,
            anneal,
            config,
        }
    }

    /// Run every trial, calling `on_trial` after each in trial order.
    ///
    /// Fails before any trial starts if a configuration does not validate.
    pub fn run<F>(&self, board: &Board, mut on_trial: F) -> Result<Estimate>
    where
        F: FnMut(&TrialReport),
    {
        self.rules.validate()?;
        self.anneal.validate()?;
        self.config.validate()?;

        let mut estimate = Estimate::new(self.config.baseline_pct);
        let mut totals = SearchStats::new();

        let mut fold = |index: u32, outcome: TrialOutcome| {
            let solved = outcome.best.is_win(self.rules);
            estimate.record(outcome.best.points(), solved);
            totals.merge(&outcome.stats);
            info!(
                trial = index,
                points = outcome.best.points(),
                solved,
                "trial finished"
            );

            let (best, first_win) = outcome.best.into_parts();
            on_trial(&TrialReport {
                index,
                best,
                first_win,
                estimate: estimate.clone(),
                stats: outcome.stats,
            });
        };

        if self.config.parallel {
            let outcomes: Vec<TrialOutcome> = (0..self.config.trials)
                .into_par_iter()
                .map(|index| {
                    let mut setup = Twister::new(self.config.setup_seed.wrapping_add(index));
                    let mut search = Twister::new(self.config.search_seed.wrapping_add(index));
                    self.run_trial(board, &mut setup, &mut search)
                })
                .collect::<Result<_>>()?;
            for (index, outcome) in (0..).zip(outcomes) {
                fold(index, outcome);
            }
        } else {
            let mut setup = Twister::new(self.config.setup_seed);
            let mut search = Twister::new(self.config.search_seed);
            for index in 0..self.config.trials {
                let outcome = self.run_trial(board, &mut setup, &mut search)?;
                fold(index, outcome);
            }
        }

        debug!(
            steps = totals.steps,
            acceptance = totals.acceptance_rate(),
            steps_per_second = totals.steps_per_second(),
            fallbacks = totals.fallbacks,
            "search totals"
        );
        Ok(estimate)
    }

    /// Complete `board` with `setup` draws and search it with `search`.
    fn run_trial(
        &self,
        board: &Board,
        setup: &mut Twister,
        search: &mut Twister,
    ) -> Result<TrialOutcome> {
        let completed = board.complete(self.catalogue, self.config.backlog_target, setup);

        let mut best = BestState::new();
        let mut annealer = Annealer::new(self.rules, self.anneal)?;
        annealer.search(&completed, &mut best, search);

        Ok(TrialOutcome {
            best,
            stats: annealer.into_stats(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Color, Tier};

    fn quick_anneal() -> AnnealConfig {
        AnnealConfig::default().with_steps(500).with_restarts(1)
    }

    fn free_catalogue() -> Catalogue {
        Catalogue::from_cards((1..=9).map(|v| Card::new([0, 0, 0, 0, 0], Color::Green, v)))
    }

    #[test]
    fn test_reports_every_trial_in_order() {
        let catalogue = free_catalogue();
        let rules = RulesConfig::default();
        let anneal = quick_anneal();
        let config = DriverConfig::default().with_trials(4);
        let driver = MonteCarloDriver::new(&catalogue, &rules, &anneal, &config);

        let mut seen = Vec::new();
        let estimate = driver
            .run(&Board::new(), |report| {
                seen.push(report.index);
                assert_eq!(report.estimate.trials, report.index + 1);
            })
            .unwrap();

        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(estimate.trials, 4);
    }

    #[test]
    fn test_completion_is_searched() {
        // Nine free tier-2 cards (45 points) are all hidden; completion deals them.
        let catalogue = free_catalogue();
        let rules = RulesConfig::default();
        let anneal = AnnealConfig::default().with_steps(3_000).with_restarts(2);
        let config = DriverConfig::default().with_trials(2);
        let driver = MonteCarloDriver::new(&catalogue, &rules, &anneal, &config);

        let estimate = driver.run(&Board::new(), |_| {}).unwrap();

        assert!(estimate.max_points > 0);
    }

    #[test]
    fn test_canonical_board_untouched() {
        let catalogue = free_catalogue();
        let rules = RulesConfig::default();
        let anneal = quick_anneal();
        let config = DriverConfig::default().with_trials(2);
        let driver = MonteCarloDriver::new(&catalogue, &rules, &anneal, &config);

        let board = Board::new();
        driver.run(&board, |_| {}).unwrap();

        assert_eq!(board.deck(Tier::Two).occupied(), 0);
        assert!(board.deck(Tier::Two).backlog().is_empty());
    }

    #[test]
    fn test_parallel_matches_itself() {
        let catalogue = free_catalogue();
        let rules = RulesConfig::default();
        let anneal = quick_anneal();
        let config = DriverConfig::default().with_trials(6).with_parallel(true);
        let driver = MonteCarloDriver::new(&catalogue, &rules, &anneal, &config);

        let mut first = Vec::new();
        let a = driver
            .run(&Board::new(), |r| first.push((r.index, r.best.points())))
            .unwrap();
        let mut second = Vec::new();
        let b = driver
            .run(&Board::new(), |r| second.push((r.index, r.best.points())))
            .unwrap();

        assert_eq!(a, b);
        assert_eq!(first, second);
        assert_eq!(first.iter().map(|p| p.0).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_invalid_config_fails_before_trials() {
        let catalogue = free_catalogue();
        let rules = RulesConfig::default();
        let anneal = AnnealConfig {
            token_range: 1,
            ..quick_anneal()
        };
        let config = DriverConfig::default().with_trials(2);
        let driver = MonteCarloDriver::new(&catalogue, &rules, &anneal, &config);

        let mut trials = 0;
        assert!(driver.run(&Board::new(), |_| trials += 1).is_err());
        assert_eq!(trials, 0);
    }
}
