//! Crate error type.
//!
//! Only input and configuration problems are errors. Illegal moves during
//! replay and inapplicable mutations are ordinary outcomes of the search
//! and never surface here.

use thiserror::Error;

use crate::cards::{Card, Tier};

/// Errors raised while loading a board, a catalogue or a configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// An input card does not match any catalogue entry.
    #[error("unrecognized card {0}")]
    UnrecognizedCard(Card),

    /// A card line named a color that does not exist.
    #[error("unknown color '{0}'")]
    UnknownColor(String),

    /// More cards were routed to a deck than its table and backlog hold.
    #[error("{tier} deck is full ({capacity} cards)")]
    DeckFull { tier: Tier, capacity: usize },

    /// A catalogue source produced no cards.
    #[error("catalogue contains no cards")]
    EmptyCatalogue,

    /// Reading input failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed or failed validation.
    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value.to_string())
    }
}

/// Result alias for fallible estimator operations.
pub type Result<T> = std::result::Result<T, Error>;
