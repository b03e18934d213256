//! Deterministic dice and deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls and deals
//! - **Serializable**: O(1) state capture and restore
//! - **Injectable**: The session only sees the `Dice` trait, so tests can
//!   script exact rolls (see `testing::SequenceDice`)
//!
//! ```
//! use rust_deadwood::core::{Dice, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.roll_die();
//! assert!((1..=6).contains(&roll));
//!
//! // Same seed, same sequence
//! let mut again = GameRng::new(42);
//! assert_eq!(again.roll_die(), roll);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Number of faces on every die in the game.
pub const DIE_FACES: u8 = 6;

/// Source of all randomness in a session.
///
/// Every die roll and every deck shuffle goes through one implementation,
/// owned by the session.
pub trait Dice {
    /// Roll one six-sided die. Always returns a value in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// Reorder the deck in place before the day's deal.
    fn shuffle_deck(&mut self, deck: &mut [CardId]);
}

/// Seedable RNG backing production sessions.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream per seed.
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

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
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

impl Dice for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    fn shuffle_deck(&mut self, deck: &mut [CardId]) {
        self.shuffle(deck);
    }
}

/// Serializable RNG state for checkpointing a session's randomness.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many dice have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
