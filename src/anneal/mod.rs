//! Simulated-annealing search over move sequences.
//!
//! ## Overview
//!
//! The search space is the set of variable-length token sequences. A
//! sequence is scored by replaying it against a completed board; illegal
//! tokens simply fall out. Each step mutates the incumbent once and accepts
//! the replayed result with the Metropolis rule under a geometrically
//! cooling temperature.
//!
//! ## Usage
//!
//! ```rust
//! use splendor_anneal::anneal::{AnnealConfig, Annealer, BestState};
//! use splendor_anneal::core::{RulesConfig, Twister};
//! use splendor_anneal::game::Board;
//!
//! let rules = RulesConfig::default();
//! let config = AnnealConfig::default().with_steps(500).with_restarts(1);
//! let board = Board::new();
//!
//! let mut best = BestState::new();
//! let mut annealer = Annealer::new(&rules, &config).unwrap();
//! annealer.search(&board, &mut best, &mut Twister::new(1));
//!
//! // Nothing to buy on an empty board.
//! assert_eq!(best.points(), 0);
//! ```

pub mod config;
pub mod mutation;
pub mod search;
pub mod stats;

pub use config::AnnealConfig;
pub use mutation::{mutate, Mutation};
pub use search::{Annealer, BestState};
pub use stats::SearchStats;
