//! Branching
//!
//! A branch runs a sub-generator to completion from the current state and
//! splices its finished trees as leading siblings at the current position.
//! The main line's future is unaffected by how far the branch advanced its
//! own clock. The two variants differ only in what survives of the branch's
//! random source.

use crate::generation::combinator::{Gen, Step};
use crate::generation::extension::Extension;
use crate::generation::state::GenState;
use tracing::trace;

/// Splice `sub` as an alternative history.
///
/// The branch's random source carries forward, so later draws never repeat
/// what the branch consumed. Its clock and clock delta are discarded.
pub fn branch<T, A, R>(sub: Gen<T, A, R>) -> Gen<T, A, R>
where
    T: 'static,
    A: 'static,
    R: 'static,
{
    Gen::new(move |state: GenState<R>| {
        let clock = state.clock;
        let clock_delta = state.clock_delta;
        let Step {
            value,
            extension,
            state: after,
        } = sub.run_step(state);
        let trees = extension.finalize();
        trace!(siblings = trees.len(), "Spliced branch");
        Step {
            value,
            extension: Extension::siblings(trees),
            state: GenState {
                rng: after.rng,
                clock,
                clock_delta,
            },
        }
    })
}

/// Splice `sub` as an alternative history and discard its whole final
/// state, random source included. Later draws are identical to a run
/// without the branch.
pub fn branch_forget_rand<T, A, R>(sub: Gen<T, A, R>) -> Gen<T, A, R>
where
    T: 'static,
    A: 'static,
    R: Clone + 'static,
{
    Gen::new(move |state: GenState<R>| {
        let snapshot = state.clone();
        let Step {
            value, extension, ..
        } = sub.run_step(state);
        let trees = extension.finalize();
        trace!(siblings = trees.len(), "Spliced branch with forgotten rng");
        Step {
            value,
            extension: Extension::siblings(trees),
            state: snapshot,
        }
    })
}

/// Splice several alternatives in order, each as its own `branch`.
pub fn branches<T, A, R, I>(subs: I) -> Gen<T, Vec<A>, R>
where
    T: 'static,
    A: 'static,
    R: 'static,
    I: IntoIterator<Item = Gen<T, A, R>>,
{
    Gen::for_each(subs, branch::<T, A, R>)
}
