//! The three-deck board.
//!
//! A `Board` built from input holds the canonical decks: known face-up cards
//! plus any known future reveals. Each trial completes a copy of it with
//! random hidden cards; the canonical board is never touched.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{Card, Catalogue, Deck, Tier};
use crate::core::{Result, Twister};

/// One deck per tier, indexed by `Tier::index`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    decks: [Deck; 3],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board with three empty decks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            decks: Tier::ALL.map(Deck::new),
        }
    }

    /// Validate cards against the catalogue and deal each to its tier's deck,
    /// in input order.
    pub fn from_cards<I>(cards: I, catalogue: &Catalogue) -> Result<Self>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut board = Self::new();
        for card in cards {
            catalogue.validate(&card)?;
            board.add_card(card)?;
        }

        debug!(
            tier1 = board.deck(Tier::One).card_set().len(),
            tier2 = board.deck(Tier::Two).card_set().len(),
            tier3 = board.deck(Tier::Three).card_set().len(),
            "board loaded"
        );
        Ok(board)
    }

    /// Deal one card to its tier's deck.
    pub fn add_card(&mut self, card: Card) -> Result<()> {
        self.decks[card.tier().index()].add_card(card)
    }

    /// Deck for a tier.
    #[must_use]
    pub fn deck(&self, tier: Tier) -> &Deck {
        &self.decks[tier.index()]
    }

    /// Mutable deck for a tier.
    pub fn deck_mut(&mut self, tier: Tier) -> &mut Deck {
        &mut self.decks[tier.index()]
    }

    /// Deck by raw index, `None` past the third.
    #[must_use]
    pub fn deck_at(&self, idx: usize) -> Option<&Deck> {
        self.decks.get(idx)
    }

    /// Mutable deck by raw index.
    pub fn deck_at_mut(&mut self, idx: usize) -> Option<&mut Deck> {
        self.decks.get_mut(idx)
    }

    /// A randomly completed copy of this board, ready to play.
    ///
    /// Tiers 1 and 2 are topped up from catalogue cards they do not already
    /// hold (tier 1 drawn first), with backlogs filled to `backlog_target`.
    /// Their backlogs are then reversed so the first known future card is
    /// revealed first. Tier 3 is left exactly as given.
    #[must_use]
    pub fn complete(&self, catalogue: &Catalogue, backlog_target: usize, rng: &mut Twister) -> Board {
        let mut board = self.clone();

        for tier in [Tier::One, Tier::Two] {
            let pool = catalogue.completion_pool(tier, &self.deck(tier).card_set());
            board.deck_mut(tier).fill_randomly(backlog_target, pool, rng);
        }
        for tier in [Tier::One, Tier::Two] {
            board.deck_mut(tier).reverse_backlog();
        }

        board
    }
}
