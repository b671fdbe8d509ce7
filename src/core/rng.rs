//! Deterministic die rolls.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical roll sequence
//! - **Uniform**: Every face 1..=6 is equally likely
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use ludo_engine::core::DiceRng;
//!
//! let mut a = DiceRng::new(7);
//! let mut b = DiceRng::new(7);
//! for _ in 0..20 {
//!     let roll = a.roll();
//!     assert!((1..=6).contains(&roll));
//!     assert_eq!(roll, b.roll());
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// Seeded six-sided die.
///
/// Uses ChaCha8 for speed while keeping a high quality, reproducible stream.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a new die with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a die seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this die was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll the die: a uniform value in `1..=6`.
    pub fn roll(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable die state.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many rolls have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
