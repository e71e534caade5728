//! Move tokens and bounded move sequences.
//!
//! ## Move
//!
//! A move token addresses a virtual slot across the three decks: token `m`
//! means deck `m / 4`, face-up slot `m % 4`. Tokens that address no deck are
//! representable and simply never commit during replay.
//!
//! ## Sequence
//!
//! An ordered list of at most `SEQUENCE_CAPACITY` tokens. A sequence is not
//! validated on its own; replaying it against concrete decks decides which
//! tokens are legal.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::TABLE_SIZE;

/// Longest sequence a state can hold.
pub const SEQUENCE_CAPACITY: usize = 40;

/// One purchase attempt: a virtual slot index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move(pub u8);

impl Move {
    /// Create a move from its raw token.
    #[must_use]
    pub const fn new(token: u8) -> Self {
        Self(token)
    }

    /// Raw token.
    #[must_use]
    pub const fn token(self) -> u8 {
        self.0
    }

    /// Deck index the token addresses (may be out of range).
    #[must_use]
    pub const fn deck_index(self) -> usize {
        self.0 as usize / TABLE_SIZE
    }

    /// Face-up slot the token addresses.
    #[must_use]
    pub const fn slot(self) -> usize {
        self.0 as usize % TABLE_SIZE
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bounded, ordered list of moves.
///
/// ## Example
///
/// ```
/// use splendor_anneal::game::{Move, Sequence};
///
/// let mut seq = Sequence::from_tokens(&[0, 5, 9]).unwrap();
/// assert!(seq.insert(1, Move::new(2)));
/// assert_eq!(seq.tokens(), vec![0, 2, 5, 9]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence {
    moves: SmallVec<[Move; SEQUENCE_CAPACITY]>,
}

impl Sequence {
    /// Create an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw tokens; `None` if there are more than
    /// `SEQUENCE_CAPACITY`.
    #[must_use]
    pub fn from_tokens(tokens: &[u8]) -> Option<Self> {
        if tokens.len() > SEQUENCE_CAPACITY {
            return None;
        }
        Some(Self {
            moves: tokens.iter().copied().map(Move).collect(),
        })
    }

    /// Number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Check if another move would overflow.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.moves.len() >= SEQUENCE_CAPACITY
    }

    /// Move at `idx`.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    /// Overwrite the move at `idx`. Out-of-range indices are ignored.
    pub fn set(&mut self, idx: usize, mv: Move) {
        if let Some(slot) = self.moves.get_mut(idx) {
            *slot = mv;
        }
    }

    /// Append a move. Returns `false` if full.
    pub fn push(&mut self, mv: Move) -> bool {
        if self.is_full() {
            return false;
        }
        self.moves.push(mv);
        true
    }

    /// Insert at `idx`, shifting the suffix right. Returns `false` if full
    /// or `idx > len`.
    pub fn insert(&mut self, idx: usize, mv: Move) -> bool {
        if self.is_full() || idx > self.moves.len() {
            return false;
        }
        self.moves.insert(idx, mv);
        true
    }

    /// Swap two positions.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.moves.swap(a, b);
    }

    /// Iterate over moves.
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().copied()
    }

    /// Moves as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Raw tokens.
    #[must_use]
    pub fn tokens(&self) -> Vec<u8> {
        self.moves.iter().map(|m| m.0).collect()
    }
}
