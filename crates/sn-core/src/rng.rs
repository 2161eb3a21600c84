//! Seedable game RNG.
//!
//! Milestone draws and bookshelf shuffling go through a single `GameRng`
//! owned by the session.  Passing a seed makes a whole run reproducible,
//! which the tests rely on; live play seeds from OS entropy.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Game-level RNG.
///
/// Used only by the owner of game state (single-threaded or behind the
/// session lock).
pub struct GameRng(SmallRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        GameRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        GameRng(SmallRng::from_entropy())
    }

    /// Seeded when `seed` is `Some`, entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None    => Self::from_entropy(),
        }
    }

    /// Derive an independent child RNG, e.g. one for the attention cycle and
    /// one for room layout, both reproducible from the root seed.
    pub fn child(&mut self, offset: u64) -> GameRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        GameRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
