//! Deterministic random number generation for seeded games.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Injectable**: Game logic only sees the `RandomSource` trait, so tests
//!   can replay a fixed sequence with `ScriptedRng`
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use funny_bunny::core::{GameRng, RandomSource};
//!
//! let mut rng1 = GameRng::new(1);
//! let mut rng2 = GameRng::new(1);
//!
//! // Same seed, same draws
//! assert_eq!(rng1.gen_inclusive(1, 6), rng2.gen_inclusive(1, 6));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform random integers.
///
/// Every random decision in the games goes through this trait: hole
/// placement, dice throws, sentence choice and cipher shuffling.
pub trait RandomSource {
    /// Draw a uniform integer in `low..=high`.
    fn gen_inclusive(&mut self, low: u32, high: u32) -> u32;

    /// Draw a uniform index in `0..len`.
    ///
    /// `len` must be non-zero.
    fn gen_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "Cannot draw an index from an empty range");
        self.gen_inclusive(0, (len - 1) as u32) as usize
    }

    /// Shuffle a slice in place (Fisher-Yates).
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i + 1);
            slice.swap(i, j);
        }
    }

    /// Choose a random element from a slice.
    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let index = self.gen_index(slice.len());
        slice.get(index)
    }
}

/// Seeded RNG used by the games.
///
/// Uses ChaCha8 for speed while keeping the sequence stable across platforms.
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

    /// Create an RNG from a seed typed by the player.
    ///
    /// Negative seeds are accepted; they are reinterpreted bit-for-bit.
    #[must_use]
    pub fn from_player_seed(seed: i64) -> Self {
        Self::new(seed as u64)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn gen_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.inner.gen_range(low..=high)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of draws.
///
/// Each call to `gen_inclusive` pops the next value. Values must lie in the
/// requested range; running out of values is a test bug and panics.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    values: VecDeque<u32>,
}

impl ScriptedRng {
    /// Create a scripted source from the draws it should return, in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of scripted draws not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRng {
    fn gen_inclusive(&mut self, low: u32, high: u32) -> u32 {
        let value = self
            .values
            .pop_front()
            .unwrap_or_else(|| panic!("ScriptedRng exhausted (wanted a draw in {low}..={high})"));
        assert!(
            (low..=high).contains(&value),
            "Scripted draw {value} outside {low}..={high}"
        );
        value
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
            assert_eq!(rng1.gen_inclusive(0, 999), rng2.gen_inclusive(0, 999));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_inclusive(0, 999)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_inclusive(0, 999)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_gen_inclusive_bounds() {
        let mut rng = GameRng::new(7);

        for _ in 0..500 {
            let roll = rng.gen_inclusive(1, 6);
            assert!((1..=6).contains(&roll));
        }

        // Degenerate range always returns its only value
        for _ in 0..10 {
            assert_eq!(rng.gen_inclusive(3, 3), 3);
        }
    }

    #[test]
    fn test_negative_player_seed() {
        let mut a = GameRng::from_player_seed(-1);
        let mut b = GameRng::new(u64::MAX);
        assert_eq!(a.seed(), u64::MAX);
        assert_eq!(a.gen_inclusive(0, 1000), b.gen_inclusive(0, 1000));
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Should be same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        // Advance the RNG
        for _ in 0..100 {
            rng.gen_inclusive(0, 999);
        }

        // Save state
        let state = rng.state();

        // Continue generating
        let expected: Vec<_> = (0..10).map(|_| rng.gen_inclusive(0, 999)).collect();

        // Restore and verify
        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_inclusive(0, 999)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_scripted_replays_in_order() {
        let mut rng = ScriptedRng::new([3, 1, 6]);
        assert_eq!(rng.remaining(), 3);
        assert_eq!(rng.gen_inclusive(1, 6), 3);
        assert_eq!(rng.gen_inclusive(1, 6), 1);
        assert_eq!(rng.gen_inclusive(1, 6), 6);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_scripted_default_shuffle() {
        // Fisher-Yates over 3 elements draws gen_index(3) then gen_index(2)
        let mut rng = ScriptedRng::new([0, 0]);
        let mut data = ['a', 'b', 'c'];
        rng.shuffle(&mut data);
        // i=2 swaps with 0 -> [c, b, a]; i=1 swaps with 0 -> [b, c, a]
        assert_eq!(data, ['b', 'c', 'a']);
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_scripted_exhausted_panics() {
        let mut rng = ScriptedRng::new(Vec::<u32>::new());
        rng.gen_inclusive(1, 6);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_scripted_out_of_range_panics() {
        let mut rng = ScriptedRng::new([9]);
        rng.gen_inclusive(1, 6);
    }
}
