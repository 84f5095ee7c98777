//! Injectable random source for generation
//!
//! All stochastic choices in one generation pass draw from a single
//! [`RandomSelector`]. Seeding it makes generation reproducible.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Random source wrapping any `rand` generator
pub struct RandomSelector<R = StdRng> {
    rng: R,
}

impl RandomSelector<StdRng> {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomSelector<R> {
    /// Wrap an existing generator
    pub const fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Bernoulli trial succeeding with probability `p`
    ///
    /// Values at or below 0 never succeed; values at or above 1 always do.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.random::<f64>() < p
    }

    /// Uniform draw from `1..upper`, or 1 when that range is empty
    pub fn path_length(&mut self, upper: usize) -> usize {
        if upper <= 2 {
            return 1;
        }
        self.rng.random_range(1..upper)
    }

    /// Uniformly pick one element
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.rng.random_range(0..items.len())).copied()
    }

    /// Shuffle in place with a uniform Fisher-Yates permutation
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
