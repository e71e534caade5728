//! Game model: moves, the three-deck board and replay.
//!
//! A candidate move sequence means nothing until it is replayed against
//! concrete decks; `GameState::replay` is the only place the purchase
//! rules are applied.

pub mod action;
pub mod board;
pub mod state;

pub use action::{Move, Sequence, SEQUENCE_CAPACITY};
pub use board::Board;
pub use state::GameState;
