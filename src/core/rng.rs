//! Deterministic Mersenne Twister (MT19937) for reproducible estimates.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Explicit seeding**: No entropy source is ever consulted
//! - **Unbiased bounded draws**: Power-of-two mask rejection sampling
//! - **`rand` compatible**: Implements `RngCore`, so `rand` adapters work too
//!
//! ## Usage
//!
//! ```
//! use splendor_anneal::core::Twister;
//!
//! let mut setup = Twister::new(23590421);
//! let mut search = Twister::new(549120939);
//!
//! // Independent instances never share state or draw order.
//! let a = setup.next_bounded(10);
//! let b = search.next_bounded(10);
//! assert!(a < 10 && b < 10);
//!
//! // Same seed, same sequence.
//! let mut again = Twister::new(23590421);
//! assert_eq!(again.next_bounded(10), a);
//! ```

use rand::RngCore;

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_B0DF;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7FFF_FFFF;
const INIT_MULTIPLIER: u32 = 1_812_433_253;

/// 2^-31, scales a 31-bit integer into [0, 1).
const UNIT_SCALE: f64 = 4.656_612_873_077_392_578_125e-10;

/// 32-bit Mersenne Twister with explicit integer seeding.
///
/// The estimator keeps two of these: one for deck completion and one for
/// the annealing search.
#[derive(Clone)]
pub struct Twister {
    state: Box<[u32; N]>,
    index: usize,
    seed: u32,
}

impl Twister {
    /// Create a generator seeded with `seed`.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let mut twister = Self {
            state: Box::new([0; N]),
            index: N,
            seed,
        };
        twister.seed(seed);
        twister
    }

    /// Re-seed in place and regenerate the first output batch.
    pub fn seed(&mut self, seed: u32) {
        self.seed = seed;
        self.state[0] = seed;
        for i in 1..N {
            let prev = self.state[i - 1];
            self.state[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.twist();
    }

    /// The seed this generator was last seeded with.
    #[must_use]
    pub fn initial_seed(&self) -> u32 {
        self.seed
    }

    /// Next tempered 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9D2C_5680;
        y ^= (y << 15) & 0xEFC6_0000;
        y ^ (y >> 18)
    }

    /// Uniform float in [0, 1] built from the low 31 bits of an output.
    ///
    /// The product is rounded to single precision, so the largest outputs
    /// round up to exactly 1.0. Acceptance decisions depend on this rounding.
    pub fn next_unit(&mut self) -> f64 {
        let scaled = f64::from(self.next_u32() & LOWER_MASK) * UNIT_SCALE;
        f64::from(scaled as f32)
    }

    /// Uniform integer in `[0, bound)`.
    ///
    /// Draws `next_u32() & mask`, where `mask` is the smallest all-ones value
    /// covering `bound - 1`, and rejects anything `>= bound`. Expected draws
    /// are below two and there is no modulo bias.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn next_bounded(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "bound must be positive");

        let mut mask = bound - 1;
        mask |= mask >> 1;
        mask |= mask >> 2;
        mask |= mask >> 4;
        mask |= mask >> 8;
        mask |= mask >> 16;

        loop {
            let candidate = self.next_u32() & mask;
            if candidate < bound {
                return candidate;
            }
        }
    }

    /// `next_bounded` for slice indices.
    pub fn next_index(&mut self, len: usize) -> usize {
        let bound = u32::try_from(len).unwrap_or(u32::MAX);
        self.next_bounded(bound) as usize
    }

    fn twist(&mut self) {
        for i in 0..N {
            let next = self.state[(i + 1) % N];
            let y = (self.state[i] & UPPER_MASK) | (next & LOWER_MASK);
            let mag = if next & 1 == 1 { MATRIX_A } else { 0 };
            self.state[i] = self.state[(i + M) % N] ^ (y >> 1) ^ mag;
        }
        self.index = 0;
    }
}

impl std::fmt::Debug for Twister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Twister")
            .field("seed", &self.seed)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl RngCore for Twister {
    fn next_u32(&mut self) -> u32 {
        Twister::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(Twister::next_u32(self));
        let hi = u64::from(Twister::next_u32(self));
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = Twister::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_outputs() {
        // Published MT19937 outputs for seed 5489.
        let mut rng = Twister::new(5489);
        assert_eq!(rng.next_u32(), 3_499_211_612);
        assert_eq!(rng.next_u32(), 581_869_302);
        assert_eq!(rng.next_u32(), 3_890_346_734);
        assert_eq!(rng.next_u32(), 3_586_334_585);
        assert_eq!(rng.next_u32(), 545_404_204);
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = Twister::new(42);
        let mut rng2 = Twister::new(42);

        for _ in 0..2000 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = Twister::new(1);
        let mut rng2 = Twister::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_u32()).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_u32()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut rng = Twister::new(7);
        let first: Vec<_> = (0..700).map(|_| rng.next_u32()).collect();

        rng.seed(7);
        let second: Vec<_> = (0..700).map(|_| rng.next_u32()).collect();

        assert_eq!(first, second);
        assert_eq!(rng.initial_seed(), 7);
    }

    #[test]
    fn test_unit_range() {
        let mut rng = Twister::new(99);
        for _ in 0..10_000 {
            let x = rng.next_unit();
            assert!((0.0..=1.0).contains(&x));
        }
    }

    #[test]
    fn test_unit_is_single_precision() {
        let mut unit = Twister::new(549_120_939);
        let mut raw = Twister::new(549_120_939);

        for _ in 0..5_000 {
            let bits = raw.next_u32() & LOWER_MASK;
            let expected = (bits as f32) * (UNIT_SCALE as f32);
            let x = unit.next_unit();
            assert_eq!(x, f64::from(expected), "bits = {bits}");
            assert_eq!(x, f64::from(x as f32));
        }
    }

    #[test]
    fn test_unit_top_values_round_to_one() {
        let scaled = f64::from(LOWER_MASK) * UNIT_SCALE;
        assert!(scaled < 1.0);
        assert_eq!(f64::from(scaled as f32), 1.0);
    }

    #[test]
    fn test_bounded_range() {
        let mut rng = Twister::new(3);
        for bound in 1..50 {
            for _ in 0..200 {
                assert!(rng.next_bounded(bound) < bound);
            }
        }
    }

    #[test]
    fn test_bounded_one_consumes_a_draw() {
        let mut rng1 = Twister::new(11);
        let mut rng2 = Twister::new(11);

        assert_eq!(rng1.next_bounded(1), 0);
        rng2.next_u32();

        assert_eq!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_power_of_two_bound_is_masked_output() {
        let mut rng1 = Twister::new(2024);
        let mut rng2 = Twister::new(2024);

        for _ in 0..100 {
            assert_eq!(rng1.next_bounded(8), rng2.next_u32() & 7);
        }
    }

    #[test]
    #[should_panic(expected = "bound must be positive")]
    fn test_zero_bound_panics() {
        Twister::new(1).next_bounded(0);
    }

    #[test]
    fn test_rand_adapter() {
        use rand::Rng;

        let mut rng = Twister::new(5);
        let x: u8 = rng.gen_range(0..4);
        assert!(x < 4);
    }
}
