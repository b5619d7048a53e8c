//! Value insertion
//!
//! Inserting a value adds one tree level: the new node takes everything the
//! rest of the program produces as its children. Timed insertion stamps the
//! payload with the current clock and then advances the clock.

use crate::generation::combinator::{Gen, Step};
use crate::generation::extension::Extension;
use crate::generation::primitives::{get_clock, step_clock, transform_with_result};
use crate::generation::state::GenState;
use crate::random::RandomSource;
use crate::time::Timed;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Standard};

/// Insert `value` as a node whose children are whatever follows.
pub fn insert_raw_value<T: 'static, R: 'static>(value: T) -> Gen<T, (), R> {
    Gen::new(move |state| Step {
        value: (),
        extension: Extension::insert(value),
        state,
    })
}

/// Insert `payload` stamped with the current clock, then step the clock.
pub fn insert_timed_value<P: 'static, R: 'static>(payload: P) -> Gen<Timed<P>, (), R> {
    get_clock()
        .bind(move |time| insert_raw_value(Timed::new(payload, time)))
        .then(step_clock())
}

/// Insert each payload in order, stepping the clock between them.
pub fn insert_timed_values<P, R, I>(payloads: I) -> Gen<Timed<P>, (), R>
where
    P: 'static,
    R: 'static,
    I: IntoIterator<Item = P>,
{
    Gen::for_each(payloads, insert_timed_value::<P, R>).map(|_| ())
}

/// Draw a value from the state's random source and insert it as a timed
/// value. Yields the drawn value.
pub fn insert_random_value<P, R>() -> Gen<Timed<P>, P, R>
where
    P: Clone + 'static,
    R: RandomSource + 'static,
    Standard: Distribution<P>,
{
    transform_with_result(GenState::<R>::draw::<P>).bind(insert_drawn::<P, R>)
}

/// Draw a value from `[low, high]` and insert it as a timed value.
///
/// Callers must pass `low <= high`; the range sampler panics otherwise.
pub fn insert_random_value_in_range<P, R>(low: P, high: P) -> Gen<Timed<P>, P, R>
where
    P: SampleUniform + PartialOrd + Clone + 'static,
    R: RandomSource + 'static,
{
    transform_with_result(move |state: GenState<R>| state.draw_in_range(low, high))
        .bind(insert_drawn::<P, R>)
}

/// `n` consecutive random insertions.
pub fn insert_random_values<P, R>(n: usize) -> Gen<Timed<P>, Vec<P>, R>
where
    P: Clone + 'static,
    R: RandomSource + 'static,
    Standard: Distribution<P>,
{
    Gen::replicate(n, insert_random_value::<P, R>)
}

fn insert_drawn<P: Clone + 'static, R: 'static>(value: P) -> Gen<Timed<P>, P, R> {
    insert_timed_value(value.clone()).map(move |_| value)
}
