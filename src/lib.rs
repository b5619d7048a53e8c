//! Tracegen: Branching Input Histories for Reactive-System Tests
//!
//! Generator combinators that build labeled trees of timestamped values.
//! Each root-to-leaf path is one input history for a system under test;
//! branch points fork a history into alternative futures.
//!
//! ```
//! use tracegen::prelude::*;
//!
//! let program = insert_timed_value("connect")
//!     .then(branch(insert_timed_value("timeout")))
//!     .then(insert_timed_values(vec!["request", "response"]));
//! let forest = run_forest(program, seeded(1));
//! assert_eq!(walker::paths(&forest).len(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod generation;
pub mod logging;
pub mod random;
pub mod time;
pub mod tree;

/// Common imports for writing generator programs.
pub mod prelude {
    pub use crate::generation::*;
    pub use crate::random::{seeded, DefaultRng, RandomSource};
    pub use crate::time::{TimePoint, TimeSpan, Timed};
    pub use crate::tree::{draw_forest, walker, Forest, Tree};
}
