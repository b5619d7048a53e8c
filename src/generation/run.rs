//! Execution entry points
//!
//! A run builds the initial state, invokes the generator once and finalizes
//! its extension against an empty future. Apart from `run_from_entropy`,
//! which seeds from the operating system, every entry point is a pure
//! function of its inputs.

use crate::config::GenerationConfig;
use crate::generation::combinator::{Gen, Step};
use crate::generation::state::GenState;
use crate::random::{self, DefaultRng};
use crate::time::TimeSpan;
use crate::tree::Forest;
use tracing::{debug, instrument};

/// Run `gen` from an explicit initial state.
#[instrument(skip_all, fields(clock_delta = %state.clock_delta))]
pub fn run_with_state<T, A, R>(gen: Gen<T, A, R>, state: GenState<R>) -> (A, Forest<T>)
where
    T: 'static,
    A: 'static,
    R: 'static,
{
    debug!("Starting generator run");
    let Step {
        value, extension, ..
    } = gen.run_step(state);
    let forest = extension.finalize();
    debug!(roots = forest.len(), "Generator run finished");
    (value, forest)
}

/// Run `gen` with the given random source, clock at zero and the default delta.
pub fn run<T, A, R>(gen: Gen<T, A, R>, rng: R) -> (A, Forest<T>)
where
    T: 'static,
    A: 'static,
    R: 'static,
{
    run_with_state(gen, GenState::new(rng))
}

/// As `run`, keeping only the forest.
pub fn run_forest<T, A, R>(gen: Gen<T, A, R>, rng: R) -> Forest<T>
where
    T: 'static,
    A: 'static,
    R: 'static,
{
    run(gen, rng).1
}

/// Run with a deterministic source for `seed`.
pub fn run_seeded<T: 'static, A: 'static>(gen: Gen<T, A>, seed: u64) -> (A, Forest<T>) {
    run(gen, random::seeded(seed))
}

/// Run with a source seeded from operating-system entropy.
pub fn run_from_entropy<T: 'static, A: 'static>(gen: Gen<T, A>) -> (A, Forest<T>) {
    run(gen, random::from_entropy())
}

/// Runs generators with a configured seed and clock delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Runner {
    seed: Option<u64>,
    clock_delta: TimeSpan,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            seed: None,
            clock_delta: TimeSpan::DEFAULT,
        }
    }
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            seed: config.seed,
            clock_delta: config.clock_delta(),
        }
    }

    /// Fix the seed; without one every run draws fresh entropy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_clock_delta(mut self, clock_delta: TimeSpan) -> Self {
        self.clock_delta = clock_delta;
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn initial_state(&self) -> GenState<DefaultRng> {
        let rng = match self.seed {
            Some(seed) => random::seeded(seed),
            None => random::from_entropy(),
        };
        GenState::with_clock_delta(rng, self.clock_delta)
    }

    pub fn run<T: 'static, A: 'static>(&self, gen: Gen<T, A>) -> (A, Forest<T>) {
        run_with_state(gen, self.initial_state())
    }

    pub fn run_forest<T: 'static, A: 'static>(&self, gen: Gen<T, A>) -> Forest<T> {
        self.run(gen).1
    }
}
