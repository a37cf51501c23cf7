//! Seed-once simulation RNG.
//!
//! One process-wide source, seeded at startup and passed by mutable
//! reference into everything that needs randomness (the population shuffler
//! is the only consumer).  Keeping the handle explicit instead of reaching
//! for a global generator means tests can construct their own `SimRng` with
//! a fixed seed: two handles built from the same seed replay identically.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The simulation's random source.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed deterministically from a 64-bit value.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
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
}
