//! Generation state threaded through every step of a generator run.

use crate::random::RandomSource;
use crate::time::{TimePoint, TimeSpan};
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Standard};

/// Random source, logical clock and clock increment of a run.
///
/// The state is moved from step to step; the only copies ever made are the
/// snapshots taken by `branch_forget_rand`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenState<R> {
    /// Exclusively owned; replaced on every draw
    pub rng: R,
    /// Current logical time
    pub clock: TimePoint,
    /// Increment applied by `step_clock`
    pub clock_delta: TimeSpan,
}

impl<R> GenState<R> {
    /// Fresh state: clock at zero, default increment.
    pub fn new(rng: R) -> Self {
        Self::with_clock_delta(rng, TimeSpan::DEFAULT)
    }

    pub fn with_clock_delta(rng: R, clock_delta: TimeSpan) -> Self {
        Self {
            rng,
            clock: TimePoint::ZERO,
            clock_delta,
        }
    }

    /// Advance the clock by the current increment.
    pub fn step_clock(mut self) -> Self {
        self.clock += self.clock_delta;
        self
    }
}

impl<R: RandomSource> GenState<R> {
    /// Draw from the random source, replacing it with its successor.
    pub fn draw<T>(self) -> (T, Self)
    where
        Standard: Distribution<T>,
    {
        let (value, rng) = self.rng.draw();
        (value, Self { rng, ..self })
    }

    /// Draw from `[low, high]`, replacing the source with its successor.
    pub fn draw_in_range<T>(self, low: T, high: T) -> (T, Self)
    where
        T: SampleUniform + PartialOrd,
    {
        let (value, rng) = self.rng.draw_in_range(low, high);
        (value, Self { rng, ..self })
    }
}
