//! The generator combinator
//!
//! A `Gen<T, A, R>` is a one-shot computation from a generation state to a
//! result value of type `A`, an extension for a tree of `T` payloads, and
//! the successor state. Sequencing runs the left generator first, feeds its
//! state to the right one, and composes the two extensions in that order.

use crate::generation::extension::Extension;
use crate::generation::state::GenState;
use crate::random::DefaultRng;

/// Everything one generator invocation produces.
#[derive(Debug)]
pub struct Step<T, A, R> {
    pub value: A,
    pub extension: Extension<T>,
    pub state: GenState<R>,
}

type StepFn<T, A, R> = Box<dyn FnOnce(GenState<R>) -> Step<T, A, R>>;

/// A generator of tree-of-`T` histories yielding an `A`.
pub struct Gen<T, A, R = DefaultRng> {
    step: StepFn<T, A, R>,
}

impl<T, A, R> std::fmt::Debug for Gen<T, A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gen").finish_non_exhaustive()
    }
}

impl<T: 'static, A: 'static, R: 'static> Gen<T, A, R> {
    /// Wrap a raw step function.
    pub fn new<F>(step: F) -> Self
    where
        F: FnOnce(GenState<R>) -> Step<T, A, R> + 'static,
    {
        Self {
            step: Box::new(step),
        }
    }

    /// Invoke the generator on `state`.
    pub fn run_step(self, state: GenState<R>) -> Step<T, A, R> {
        (self.step)(state)
    }

    /// Yield `value` without touching the state or the tree.
    pub fn pure(value: A) -> Self {
        Self::new(move |state| Step {
            value,
            extension: Extension::identity(),
            state,
        })
    }

    /// Transform the result value.
    pub fn map<B: 'static, F>(self, f: F) -> Gen<T, B, R>
    where
        F: FnOnce(A) -> B + 'static,
    {
        Gen::new(move |state| {
            let Step {
                value,
                extension,
                state,
            } = self.run_step(state);
            Step {
                value: f(value),
                extension,
                state,
            }
        })
    }

    /// Run `self` for a function, then `arg` for its argument, and apply.
    pub fn apply<B: 'static, C: 'static>(self, arg: Gen<T, B, R>) -> Gen<T, C, R>
    where
        A: FnOnce(B) -> C,
    {
        Gen::new(move |state| {
            let first = self.run_step(state);
            let second = arg.run_step(first.state);
            Step {
                value: (first.value)(second.value),
                extension: first.extension.then(second.extension),
                state: second.state,
            }
        })
    }

    /// Dependent sequencing: the result of `self` chooses the next generator.
    pub fn bind<B: 'static, K>(self, k: K) -> Gen<T, B, R>
    where
        K: FnOnce(A) -> Gen<T, B, R> + 'static,
    {
        Gen::new(move |state| {
            let first = self.run_step(state);
            let second = k(first.value).run_step(first.state);
            Step {
                value: second.value,
                extension: first.extension.then(second.extension),
                state: second.state,
            }
        })
    }

    /// Sequence `next` after `self`, keeping only the second result.
    pub fn then<B: 'static>(self, next: Gen<T, B, R>) -> Gen<T, B, R> {
        self.bind(move |_| next)
    }

    /// Sequence two generators and pair their results.
    pub fn zip<B: 'static>(self, other: Gen<T, B, R>) -> Gen<T, (A, B), R> {
        self.map(|a| move |b: B| (a, b)).apply(other)
    }

    /// Run every generator in order, collecting results.
    pub fn sequence<I>(gens: I) -> Gen<T, Vec<A>, R>
    where
        I: IntoIterator<Item = Gen<T, A, R>>,
    {
        let gens: Vec<_> = gens.into_iter().collect();
        Gen::new(move |state| {
            let mut values = Vec::with_capacity(gens.len());
            let mut extension = Extension::identity();
            let mut state = state;
            for gen in gens {
                let step = gen.run_step(state);
                values.push(step.value);
                extension = extension.then(step.extension);
                state = step.state;
            }
            Step {
                value: values,
                extension,
                state,
            }
        })
    }

    /// Build a generator per item and run them in order.
    pub fn for_each<I, F>(items: I, f: F) -> Gen<T, Vec<A>, R>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> Gen<T, A, R>,
    {
        Self::sequence(items.into_iter().map(f).collect::<Vec<_>>())
    }

    /// Run `n` generators produced by `factory`, in order.
    pub fn replicate<F>(n: usize, mut factory: F) -> Gen<T, Vec<A>, R>
    where
        F: FnMut() -> Gen<T, A, R>,
    {
        Self::sequence((0..n).map(|_| factory()).collect::<Vec<_>>())
    }
}
