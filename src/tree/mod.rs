//! History Trees
//!
//! Generated histories are rose trees: each node holds one step of input,
//! its children are the alternative continuations that may follow it. A run
//! produces a forest because branching at the top level yields several roots.

pub mod node;
pub mod render;
pub mod walker;

pub use node::{Forest, Tree};
pub use render::draw_forest;
