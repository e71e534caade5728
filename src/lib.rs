//! # splendor-anneal
//!
//! Estimates how likely a partially known solitaire Splendor setup is to be
//! winnable within a fixed round budget.
//!
//! ## Approach
//!
//! 1. **Completion**: the hidden part of the first two decks is dealt at
//!    random from catalogue cards not already placed.
//!
//! 2. **Search**: simulated annealing over purchase sequences. A sequence
//!    is a list of small tokens, each naming a deck and a face-up slot;
//!    replaying it against the completed decks skips anything illegal.
//!
//! 3. **Estimate**: many completions are searched and the share that reach
//!    the win threshold is reported, together with its lift over a random
//!    board.
//!
//! All randomness comes from a seeded Mersenne Twister, so a run is fully
//! reproducible from its two seeds.
//!
//! ## Modules
//!
//! - `core`: RNG, rule configuration, errors
//! - `cards`: Colors, cards, the catalogue, decks
//! - `game`: Moves, sequences, the board, replay
//! - `anneal`: Mutation operators and the annealing search
//! - `driver`: Monte-Carlo loop over random completions
//! - `report`: Progress and solution text

pub mod core;
pub mod cards;
pub mod game;
pub mod anneal;
pub mod driver;
pub mod report;

// Re-export commonly used types
pub use crate::core::{Error, Result, RulesConfig, Twister};

pub use crate::cards::{BonusVector, Card, Catalogue, Color, ColorMap, Deck, Tier};

pub use crate::game::{Board, GameState, Move, Sequence};

pub use crate::anneal::{AnnealConfig, Annealer, BestState, Mutation, SearchStats};

pub use crate::driver::{DriverConfig, Estimate, EstimatorConfig, MonteCarloDriver, TrialReport};

pub use crate::report::{ProgressLine, SolutionDump};
