//! Built-in demonstration program used by the CLI and benchmarks.

use crate::generation::{branches, insert_random_value_in_range, Gen};
use crate::random::DefaultRng;
use crate::time::Timed;

/// Largest sensor reading the demo produces.
pub const MAX_READING: u8 = 100;

/// A stream of `steps` random sensor readings. Before each reading,
/// `alternatives` one-reading branches are spliced in as competing inputs
/// at that point in the history.
pub fn demo_program(steps: usize, alternatives: usize) -> Gen<Timed<u8>, Vec<u8>, DefaultRng> {
    Gen::replicate(steps, move || {
        branches((0..alternatives).map(|_| insert_random_value_in_range(0, MAX_READING)))
            .then(insert_random_value_in_range(0, MAX_READING))
    })
}
