//! Tree-extension functions
//!
//! A generator step does not build its part of the tree directly. It emits
//! an `Extension`: a transformer from "the trees that will follow this step"
//! to "the trees from this step onward". Sequential steps compose so that
//! the earlier step wraps whatever the later steps produce, which is how a
//! linear program turns into nested tree levels. The future is supplied
//! once, as an empty forest, when a run is finalized.
//!
//! Extensions are stored as an ordered list of splice operations rather than
//! nested closures, so finalizing a long history is a loop instead of a deep
//! call chain.

use crate::tree::{Forest, Tree};
use std::collections::VecDeque;

/// One step's contribution to the tree.
#[derive(Debug, Clone, PartialEq)]
enum Splice<T> {
    /// Wrap the future as the children of a new node
    Node(T),
    /// Place finished trees as leading siblings of the future
    Siblings(Forest<T>),
}

/// A deferred `Forest<T> -> Forest<T>` transformer.
#[derive(Debug, Clone, PartialEq)]
pub struct Extension<T> {
    // Earliest step first; applied last-to-first.
    ops: VecDeque<Splice<T>>,
}

impl<T> Default for Extension<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Extension<T> {
    /// The no-op transformer.
    pub fn identity() -> Self {
        Self {
            ops: VecDeque::new(),
        }
    }

    /// Transformer that wraps the future as children of a node holding `value`.
    pub fn insert(value: T) -> Self {
        Self {
            ops: VecDeque::from(vec![Splice::Node(value)]),
        }
    }

    /// Transformer that prepends `trees` to the future.
    pub fn siblings(trees: Forest<T>) -> Self {
        if trees.is_empty() {
            return Self::identity();
        }
        Self {
            ops: VecDeque::from(vec![Splice::Siblings(trees)]),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// Compose with a later step: the result applies `later` to the future
    /// first and hands its output to `self`.
    pub fn then(mut self, mut later: Extension<T>) -> Extension<T> {
        if self.ops.len() >= later.ops.len() {
            self.ops.append(&mut later.ops);
            self
        } else {
            while let Some(op) = self.ops.pop_back() {
                later.ops.push_front(op);
            }
            later
        }
    }

    /// Run the transformer against the given future.
    pub fn apply(self, future: Forest<T>) -> Forest<T> {
        let mut forest = future;
        for op in self.ops.into_iter().rev() {
            forest = match op {
                Splice::Node(value) => vec![Tree::node(value, forest)],
                Splice::Siblings(mut trees) => {
                    trees.append(&mut forest);
                    trees
                }
            };
        }
        forest
    }

    /// Apply against the empty "no further future" forest.
    pub fn finalize(self) -> Forest<T> {
        self.apply(Vec::new())
    }
}
