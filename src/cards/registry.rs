//! Card catalogue: the complete, read-only set of cards in the game.
//!
//! The catalogue validates input boards and supplies the cards used to
//! complete hidden decks. It is an ordered set, so completion pools are
//! always built in the same order and a fixed seed reproduces the same
//! completions.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use rustc_hash::FxHashSet;
use tracing::info;

use super::definition::{Card, Tier};
use crate::core::{Error, Result};

/// Catalogue text compiled into the binary.
const BUILTIN_CATALOGUE: &str = include_str!("../../data/catalogue.txt");

/// Ordered set of every card in the game.
///
/// ## Example
///
/// ```
/// use splendor_anneal::cards::{Card, Catalogue, Color};
///
/// let catalogue = Catalogue::builtin().unwrap();
/// let card = Card::new([0, 0, 3, 0, 0], Color::Black, 0);
/// assert!(catalogue.contains(&card));
/// assert!(catalogue.validate(&card).is_ok());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalogue {
    cards: BTreeSet<Card>,
}

impl Catalogue {
    /// The catalogue shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_text(BUILTIN_CATALOGUE)
    }

    /// Build a catalogue from card text, one card per line.
    ///
    /// Malformed lines are skipped. Duplicates collapse.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut cards = BTreeSet::new();
        for line in text.lines() {
            if let Some(card) = Card::parse_line(line)? {
                cards.insert(card);
            }
        }

        if cards.is_empty() {
            return Err(Error::EmptyCatalogue);
        }

        let catalogue = Self { cards };
        info!(
            total = catalogue.len(),
            tier1 = catalogue.count_in(Tier::One),
            tier2 = catalogue.count_in(Tier::Two),
            tier3 = catalogue.count_in(Tier::Three),
            "catalogue loaded"
        );
        Ok(catalogue)
    }

    /// Read a catalogue file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_text(&text)
    }

    /// Build a catalogue from cards directly.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Check whether a card is in the catalogue.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Reject cards the catalogue does not know.
    pub fn validate(&self, card: &Card) -> Result<()> {
        if self.contains(card) {
            Ok(())
        } else {
            Err(Error::UnrecognizedCard(*card))
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate in card order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Number of cards in a tier.
    #[must_use]
    pub fn count_in(&self, tier: Tier) -> usize {
        self.cards.iter().filter(|c| c.tier() == tier).count()
    }

    /// Cards of `tier` not in `exclude`, in catalogue order.
    ///
    /// Tier 3 is always fully specified by the board, so its pool is empty.
    #[must_use]
    pub fn completion_pool(&self, tier: Tier, exclude: &FxHashSet<Card>) -> Vec<Card> {
        if tier == Tier::Three {
            return Vec::new();
        }
        self.cards
            .iter()
            .filter(|c| c.tier() == tier && !exclude.contains(c))
            .copied()
            .collect()
    }
}
