//! Random Sources
//!
//! Generators thread their random source by value: every draw consumes the
//! source and hands back its successor, so no draw is hidden from the state
//! that owns it. Any `rand` generator that is `RngCore` gets this interface
//! for free.

use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Random source used when a generator does not name one.
pub type DefaultRng = StdRng;

/// A random source with value-threading draws.
pub trait RandomSource: Sized {
    /// Draw an unconstrained sample, yielding it with the next source state.
    fn draw<T>(self) -> (T, Self)
    where
        Standard: Distribution<T>;

    /// Draw a sample from the inclusive range `[low, high]`.
    ///
    /// `low > high` is not checked here; the underlying sampler panics.
    fn draw_in_range<T>(self, low: T, high: T) -> (T, Self)
    where
        T: SampleUniform + PartialOrd;
}

impl<R: RngCore> RandomSource for R {
    fn draw<T>(mut self) -> (T, Self)
    where
        Standard: Distribution<T>,
    {
        let value = self.gen();
        (value, self)
    }

    fn draw_in_range<T>(mut self, low: T, high: T) -> (T, Self)
    where
        T: SampleUniform + PartialOrd,
    {
        let value = self.gen_range(low..=high);
        (value, self)
    }
}

/// Deterministic source for a fixed seed.
pub fn seeded(seed: u64) -> DefaultRng {
    StdRng::seed_from_u64(seed)
}

/// Fresh source seeded from operating-system entropy.
pub fn from_entropy() -> DefaultRng {
    StdRng::from_entropy()
}
