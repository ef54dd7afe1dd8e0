//! Deterministic random number generation for match setup.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same word draw and board
//! - **Context streams**: Independent sequences for drawing words, laying out
//!   the board and picking the starting team, so changing one step never
//!   shifts the others
//!
//! ```
//! use word_detective::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut words = rng.for_context("words");
//! let mut board = rng.for_context("board");
//!
//! // Streams are independent but reproducible.
//! let mut again = GameRng::new(42).for_context("words");
//! assert_eq!(words.gen_range_usize(0..100), again.gen_range_usize(0..100));
//! let _ = board.gen_range_usize(0..100);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Deterministic RNG used for everything random in a match.
///
/// Uses ChaCha8 so the same seed yields the same sequence on every platform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    /// The context seed is an `FxHasher` digest of the seed and the context
    /// bytes, fixed for a given pointer width.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let context_seed = Self::context_seed(self.seed, context);

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
        }
    }

    fn context_seed(seed: u64, context: &str) -> u64 {
        let mut hasher = FxHasher::default();
        hasher.write_u64(seed);
        hasher.write(context.as_bytes());
        hasher.finish()
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Pick `amount` distinct indices from `0..length`, in random order.
    ///
    /// Returns fewer than `amount` only when `length < amount`.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.inner, length, amount.min(length)).into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_produces_different_sequence() {
        let rng = GameRng::new(42);
        let mut ctx1 = rng.for_context("words");
        let mut ctx2 = rng.for_context("board");

        let seq1: Vec<_> = (0..10).map(|_| ctx1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| ctx2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_is_deterministic() {
        let mut ctx1 = GameRng::new(42).for_context("board");
        let mut ctx2 = GameRng::new(42).for_context("board");

        for _ in 0..10 {
            assert_eq!(ctx1.gen_range_usize(0..1000), ctx2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_context_seeds_are_pinned() {
        let rng = GameRng::new(42);
        assert_eq!(rng.for_context("draw").seed(), 0x282d_a4e0_7338_9d5b);
        assert_eq!(rng.for_context("deal").seed(), 0xc222_ce4f_bd84_b85b);
        assert_eq!(rng.for_context("starting_team").seed(), 0x958b_715a_8c52_ace4);
    }

    #[test]
    fn test_sample_indices_distinct() {
        let mut rng = GameRng::new(7);
        let mut picked = rng.sample_indices(100, 25);
        assert_eq!(picked.len(), 25);

        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 25);
        assert!(picked.iter().all(|&i| i < 100));
    }

    #[test]
    fn test_sample_indices_clamps_to_length() {
        let mut rng = GameRng::new(7);
        assert_eq!(rng.sample_indices(3, 10).len(), 3);
    }
}
