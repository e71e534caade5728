//! Sequence mutation operators.
//!
//! Each annealing step applies exactly one successful mutation to a copy of
//! the incumbent sequence. The kind is drawn uniformly; a kind that does not
//! apply to the current sequence fails and the draw is repeated.
//!
//! - **CHANGE**: replace one token with a different random token
//! - **INSERT**: insert a random token at a random position
//! - **SWAP**: exchange two distinct positions holding different tokens

use tracing::warn;

use super::config::AnnealConfig;
use super::stats::SearchStats;
use crate::core::Twister;
use crate::game::{Move, Sequence};

/// Mutation kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mutation {
    Change,
    Insert,
    Swap,
}

impl Mutation {
    /// All kinds, in draw order.
    pub const ALL: [Mutation; 3] = [Mutation::Change, Mutation::Insert, Mutation::Swap];

    /// Draw a kind uniformly.
    pub fn sample(rng: &mut Twister) -> Self {
        Self::ALL[rng.next_index(Self::ALL.len())]
    }

    /// Try to apply this mutation in place. Returns `false`, possibly after
    /// consuming random draws, if it does not apply.
    pub fn apply(self, seq: &mut Sequence, rng: &mut Twister, config: &AnnealConfig) -> bool {
        let range = u32::from(config.token_range);
        match self {
            Mutation::Change => {
                if seq.is_empty() {
                    return false;
                }
                let pos = rng.next_index(seq.len());
                let Some(old) = seq.get(pos) else {
                    return false;
                };
                loop {
                    let token = rng.next_bounded(range) as u8;
                    if token != old.token() {
                        seq.set(pos, Move::new(token));
                        return true;
                    }
                }
            }
            Mutation::Insert => {
                if seq.len() > config.insert_limit {
                    return false;
                }
                let pos = rng.next_index(seq.len() + 1);
                let token = rng.next_bounded(range) as u8;
                seq.insert(pos, Move::new(token))
            }
            Mutation::Swap => {
                if seq.len() < 3 {
                    return false;
                }
                let a = rng.next_index(seq.len());
                let b = rng.next_index(seq.len());
                if a == b || seq.get(a) == seq.get(b) {
                    return false;
                }
                seq.swap(a, b);
                true
            }
        }
    }
}

/// Apply exactly one mutation, retrying failed draws.
///
/// After `mutation_retry_limit` failures, falls back to INSERT (or CHANGE
/// when the sequence is past the insert limit), which always applies.
pub fn mutate(
    seq: &mut Sequence,
    rng: &mut Twister,
    config: &AnnealConfig,
    stats: &mut SearchStats,
) -> Mutation {
    for _ in 0..config.mutation_retry_limit {
        stats.mutation_attempts += 1;
        let kind = Mutation::sample(rng);
        if kind.apply(seq, rng, config) {
            return kind;
        }
    }

    stats.fallbacks += 1;
    warn!(
        len = seq.len(),
        limit = config.mutation_retry_limit,
        "mutation retry cap reached, using fallback"
    );

    let kind = if seq.len() <= config.insert_limit {
        Mutation::Insert
    } else {
        Mutation::Change
    };
    stats.mutation_attempts += 1;
    let applied = kind.apply(seq, rng, config);
    debug_assert!(applied, "fallback mutation must apply");
    kind
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AnnealConfig {
        AnnealConfig::default()
    }

    #[test]
    fn test_change_fails_on_empty() {
        let mut seq = Sequence::new();
        let mut rng = Twister::new(1);
        assert!(!Mutation::Change.apply(&mut seq, &mut rng, &config()));
    }

    #[test]
    fn test_change_replaces_with_different_token() {
        let mut rng = Twister::new(2);
        for _ in 0..100 {
            let mut seq = Sequence::from_tokens(&[3]).unwrap();
            assert!(Mutation::Change.apply(&mut seq, &mut rng, &config()));
            let token = seq.get(0).unwrap().token();
            assert_ne!(token, 3);
            assert!(token < 10);
        }
    }

    #[test]
    fn test_insert_grows_and_respects_limit() {
        let mut rng = Twister::new(3);
        let mut seq = Sequence::new();
        for len in 1..=31 {
            assert!(Mutation::Insert.apply(&mut seq, &mut rng, &config()));
            assert_eq!(seq.len(), len);
        }
        assert!(!Mutation::Insert.apply(&mut seq, &mut rng, &config()));
        assert_eq!(seq.len(), 31);
        assert!(seq.iter().all(|m| m.token() < 10));
    }

    #[test]
    fn test_swap_needs_three() {
        let mut rng = Twister::new(4);
        let mut seq = Sequence::from_tokens(&[1, 2]).unwrap();
        for _ in 0..50 {
            assert!(!Mutation::Swap.apply(&mut seq, &mut rng, &config()));
        }
        assert_eq!(seq.tokens(), vec![1, 2]);
    }

    #[test]
    fn test_swap_of_equal_tokens_fails() {
        let mut rng = Twister::new(5);
        let mut seq = Sequence::from_tokens(&[7, 7, 7, 7]).unwrap();
        for _ in 0..50 {
            assert!(!Mutation::Swap.apply(&mut seq, &mut rng, &config()));
        }
    }

    #[test]
    fn test_swap_preserves_multiset() {
        let mut rng = Twister::new(6);
        let mut seq = Sequence::from_tokens(&[1, 2, 3, 4]).unwrap();
        let mut swapped = 0;
        for _ in 0..50 {
            if Mutation::Swap.apply(&mut seq, &mut rng, &config()) {
                swapped += 1;
            }
            let mut tokens = seq.tokens();
            tokens.sort_unstable();
            assert_eq!(tokens, vec![1, 2, 3, 4]);
        }
        assert!(swapped > 0);
    }

    #[test]
    fn test_mutate_always_changes_empty_sequence() {
        let mut rng = Twister::new(7);
        let mut stats = SearchStats::new();
        let mut seq = Sequence::new();

        let kind = mutate(&mut seq, &mut rng, &config(), &mut stats);

        assert_eq!(kind, Mutation::Insert);
        assert_eq!(seq.len(), 1);
        assert!(stats.mutation_attempts >= 1);
    }

    #[test]
    fn test_mutate_fallback_when_cap_is_zero() {
        let mut rng = Twister::new(8);
        let mut stats = SearchStats::new();
        let config = AnnealConfig {
            mutation_retry_limit: 0,
            ..AnnealConfig::default()
        };

        let mut seq = Sequence::new();
        assert_eq!(mutate(&mut seq, &mut rng, &config, &mut stats), Mutation::Insert);
        assert_eq!(stats.fallbacks, 1);

        let mut full = Sequence::from_tokens(&[1; 31]).unwrap();
        assert_eq!(mutate(&mut full, &mut rng, &config, &mut stats), Mutation::Change);
        assert_eq!(full.len(), 31);
        assert_eq!(stats.fallbacks, 2);
    }
}
