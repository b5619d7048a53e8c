//! State and clock primitives
//!
//! These read or rewrite the threaded generation state. None of them touch
//! the tree: each yields the identity extension.

use crate::generation::combinator::{Gen, Step};
use crate::generation::extension::Extension;
use crate::generation::state::GenState;
use crate::time::{TimePoint, TimeSpan};

/// Apply a state update that also yields a value.
pub fn transform_with_result<T, B, R, F>(f: F) -> Gen<T, B, R>
where
    T: 'static,
    B: 'static,
    R: 'static,
    F: FnOnce(GenState<R>) -> (B, GenState<R>) + 'static,
{
    Gen::new(move |state| {
        let (value, state) = f(state);
        Step {
            value,
            extension: Extension::identity(),
            state,
        }
    })
}

/// Apply a pure state update.
pub fn transform<T, R, F>(f: F) -> Gen<T, (), R>
where
    T: 'static,
    R: 'static,
    F: FnOnce(GenState<R>) -> GenState<R> + 'static,
{
    transform_with_result(move |state| ((), f(state)))
}

/// Read the whole state. The random source is copied out, not shared.
pub fn get<T: 'static, R: Clone + 'static>() -> Gen<T, GenState<R>, R> {
    transform_with_result(|state: GenState<R>| (state.clone(), state))
}

/// Replace the whole state.
pub fn put<T: 'static, R: 'static>(state: GenState<R>) -> Gen<T, (), R> {
    transform(move |_| state)
}

pub fn get_clock<T: 'static, R: 'static>() -> Gen<T, TimePoint, R> {
    transform_with_result(|state: GenState<R>| (state.clock, state))
}

pub fn set_clock<T: 'static, R: 'static>(clock: TimePoint) -> Gen<T, (), R> {
    transform(move |state: GenState<R>| GenState { clock, ..state })
}

/// Advance the clock by the current delta, saturating at the largest
/// representable time.
pub fn step_clock<T: 'static, R: 'static>() -> Gen<T, (), R> {
    transform(GenState::step_clock)
}

pub fn get_clock_delta<T: 'static, R: 'static>() -> Gen<T, TimeSpan, R> {
    transform_with_result(|state: GenState<R>| (state.clock_delta, state))
}

pub fn set_clock_delta<T: 'static, R: 'static>(clock_delta: TimeSpan) -> Gen<T, (), R> {
    transform(move |state: GenState<R>| GenState {
        clock_delta,
        ..state
    })
}
