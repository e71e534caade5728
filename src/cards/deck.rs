//! Per-tier deck: four face-up slots plus a hidden backlog.
//!
//! Buying a face-up card vacates its slot, which is refilled from the tail
//! of the backlog. The backlog is therefore a stack: the last card in it is
//! the next one revealed.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::{Card, Tier};
use crate::core::{Error, Result, Twister};

/// Face-up slots per deck.
pub const TABLE_SIZE: usize = 4;

/// Hidden cards a deck can hold behind its table.
pub const BACKLOG_CAPACITY: usize = 30;

/// A tier's face-up table and hidden backlog.
///
/// Decks are plain values: copying one gives an independent snapshot, which
/// is how each trial and each replay gets a private deck.
///
/// ## Example
///
/// ```
/// use splendor_anneal::cards::{Card, Color, Deck, Tier};
///
/// let mut deck = Deck::new(Tier::One);
/// for cost in 1..=5u8 {
///     deck.add_card(Card::new([cost, 0, 0, 0, 0], Color::Red, 0)).unwrap();
/// }
/// assert_eq!(deck.occupied(), 4);
/// assert_eq!(deck.backlog().len(), 1);
///
/// // Buying slot 2 reveals the backlog card there.
/// let bought = deck.pop_and_refill(2).unwrap();
/// assert_eq!(bought.cost_vector().as_array()[0], 3);
/// assert_eq!(deck.slot(2).unwrap().cost_vector().as_array()[0], 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    tier: Tier,
    table: [Option<Card>; TABLE_SIZE],
    /// Table slots ever dealt; add/fill deal into `table[dealt]`.
    dealt: usize,
    backlog: SmallVec<[Card; BACKLOG_CAPACITY]>,
}

impl Deck {
    /// Create an empty deck for a tier.
    #[must_use]
    pub fn new(tier: Tier) -> Self {
        Self {
            tier,
            table: [None; TABLE_SIZE],
            dealt: 0,
            backlog: SmallVec::new(),
        }
    }

    /// Tier this deck holds.
    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Add a card: the first four fill the table, later ones append to the
    /// backlog in call order.
    pub fn add_card(&mut self, card: Card) -> Result<()> {
        if self.dealt < TABLE_SIZE {
            self.table[self.dealt] = Some(card);
            self.dealt += 1;
            Ok(())
        } else if self.backlog.len() < BACKLOG_CAPACITY {
            self.backlog.push(card);
            Ok(())
        } else {
            Err(Error::DeckFull {
                tier: self.tier,
                capacity: TABLE_SIZE + BACKLOG_CAPACITY,
            })
        }
    }

    /// Face-up card at `idx`, if any.
    #[must_use]
    pub fn slot(&self, idx: usize) -> Option<&Card> {
        self.table.get(idx).and_then(Option::as_ref)
    }

    /// Face-up slots, empty ones as `None`.
    #[must_use]
    pub fn table(&self) -> &[Option<Card>; TABLE_SIZE] {
        &self.table
    }

    /// Hidden cards; the last one is revealed next.
    #[must_use]
    pub fn backlog(&self) -> &[Card] {
        &self.backlog
    }

    /// Number of occupied face-up slots.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.table.iter().filter(|s| s.is_some()).count()
    }

    /// Take the card at `idx`, refilling the slot from the backlog tail.
    ///
    /// Returns `None` (and changes nothing) if the slot is empty.
    pub fn pop_and_refill(&mut self, idx: usize) -> Option<Card> {
        let card = self.table.get_mut(idx)?.take()?;
        self.table[idx] = self.backlog.pop();
        Some(card)
    }

    /// Deal random pool cards: first into undealt table slots, then onto the
    /// backlog until it holds `target_backlog` cards or the pool runs out.
    ///
    /// Each draw picks a uniform index, takes that card and moves the pool's
    /// last card into the hole.
    pub fn fill_randomly(&mut self, target_backlog: usize, mut pool: Vec<Card>, rng: &mut Twister) {
        while self.dealt < TABLE_SIZE && !pool.is_empty() {
            let x = rng.next_index(pool.len());
            self.table[self.dealt] = Some(pool.swap_remove(x));
            self.dealt += 1;
        }

        let target = target_backlog.min(BACKLOG_CAPACITY);
        while self.backlog.len() < target && !pool.is_empty() {
            let x = rng.next_index(pool.len());
            self.backlog.push(pool.swap_remove(x));
        }
    }

    /// Reverse the backlog, so the first card added is revealed first.
    pub fn reverse_backlog(&mut self) {
        self.backlog.reverse();
    }

    /// Every card dealt to this deck, face-up or hidden.
    #[must_use]
    pub fn card_set(&self) -> FxHashSet<Card> {
        self.table[..self.dealt]
            .iter()
            .flatten()
            .chain(self.backlog.iter())
            .copied()
            .collect()
    }
}
