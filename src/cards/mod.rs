//! Card system: colors, card values, the catalogue and decks.
//!
//! ## Key Types
//!
//! - `Color`: One of the five gem colors
//! - `ColorMap` / `BonusVector`: Per-color storage, per-color discounts
//! - `Card`: Immutable cost vector, bonus color and point value
//! - `Tier`: Deck a card belongs to, decided by point value
//! - `Catalogue`: Every card in the game, ordered
//! - `Deck`: Four face-up slots over a hidden backlog

pub mod color;
pub mod deck;
pub mod definition;
pub mod registry;

pub use color::{BonusVector, Color, ColorMap, COLOR_COUNT};
pub use deck::{Deck, BACKLOG_CAPACITY, TABLE_SIZE};
pub use definition::{Card, Tier, TIER_THREE_VALUE};
pub use registry::Catalogue;
