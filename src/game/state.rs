//! Resolved game state: the outcome of replaying a move sequence.
//!
//! ## Replay
//!
//! `GameState::replay` plays a candidate sequence against private copies of
//! the board's decks. Each token is tried in order and either commits or is
//! silently dropped:
//!
//! - Dropped if it addresses no deck, or an empty face-up slot
//! - Dropped if the card is unaffordable under the current bonus vector
//! - Dropped if buying it would leave too few rounds to re-earn the tokens
//!   spent so far (`rounds + 1 + ceil(tokens / 4) > budget`)
//!
//! A committed move adds the card's points, pays its cost, uses a round,
//! raises the bonus for its color and reveals the next hidden card.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{Move, Sequence, SEQUENCE_CAPACITY};
use super::board::Board;
use crate::cards::{BonusVector, Card};
use crate::core::RulesConfig;

/// Result of replaying a sequence.
///
/// `moves` holds only the committed tokens, so replaying `moves` again on the
/// same board reproduces this state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    moves: Sequence,
    cards: SmallVec<[Card; SEQUENCE_CAPACITY]>,
    points: u32,
    tokens_cost: u32,
    rounds: u32,
    bonus: BonusVector,
}

impl GameState {
    /// Empty state: no moves, no points.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replay `candidate` against copies of `board`'s decks.
    #[must_use]
    pub fn replay(candidate: &Sequence, board: &Board, rules: &RulesConfig) -> Self {
        let mut decks = board.clone();
        let mut state = Self::new();
        for mv in candidate.iter() {
            state.try_commit(mv, &mut decks, rules);
        }
        state
    }

    /// Apply one move if legal. Returns whether it committed.
    pub fn try_commit(&mut self, mv: Move, decks: &mut Board, rules: &RulesConfig) -> bool {
        if self.moves.is_full() {
            return false;
        }
        let Some(deck) = decks.deck_at_mut(mv.deck_index()) else {
            return false;
        };
        let Some(card) = deck.slot(mv.slot()).copied() else {
            return false;
        };
        let Some(cost) = card.cost(&self.bonus, rules) else {
            return false;
        };
        if self.rounds + 1 + rules.recovery_rounds(self.tokens_cost + cost) > rules.round_budget {
            return false;
        }

        self.points += u32::from(card.value());
        self.tokens_cost += cost;
        self.rounds += 1;
        self.bonus[card.color()] += 1;
        self.moves.push(mv);
        self.cards.push(card);
        deck.pop_and_refill(mv.slot());
        true
    }

    /// Committed moves.
    #[must_use]
    pub fn moves(&self) -> &Sequence {
        &self.moves
    }

    /// Card bought by each committed move.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Committed (move, card) pairs.
    pub fn purchases(&self) -> impl Iterator<Item = (Move, &Card)> + '_ {
        self.moves.iter().zip(self.cards.iter())
    }

    /// Points scored.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Tokens spent.
    #[must_use]
    pub fn tokens_cost(&self) -> u32 {
        self.tokens_cost
    }

    /// Rounds used (one per committed move).
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Bonus vector after all committed moves.
    #[must_use]
    pub fn bonus(&self) -> &BonusVector {
        &self.bonus
    }

    /// Rounds used plus rounds needed to re-earn every token spent.
    #[must_use]
    pub fn recovery_rounds(&self, rules: &RulesConfig) -> u32 {
        self.rounds + rules.recovery_rounds(self.tokens_cost)
    }

    /// Check if the score reaches the win threshold.
    #[must_use]
    pub fn is_win(&self, rules: &RulesConfig) -> bool {
        self.points >= rules.win_threshold
    }
}
