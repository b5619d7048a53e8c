//! Generator combinators
//!
//! Build input histories step by step. A `Gen` threads a `GenState` (random
//! source, logical clock, clock delta) through a program and collects a
//! deferred tree `Extension`; running it finalizes the extension into a
//! forest of timestamped values.

pub mod branch;
pub mod combinator;
pub mod extension;
pub mod insert;
pub mod primitives;
pub mod run;
pub mod state;

pub use branch::{branch, branch_forget_rand, branches};
pub use combinator::{Gen, Step};
pub use extension::Extension;
pub use insert::{
    insert_random_value, insert_random_value_in_range, insert_random_values, insert_raw_value,
    insert_timed_value, insert_timed_values,
};
pub use primitives::{
    get, get_clock, get_clock_delta, put, set_clock, set_clock_delta, step_clock, transform,
    transform_with_result,
};
pub use run::{run, run_forest, run_from_entropy, run_seeded, run_with_state, Runner};
pub use state::GenState;
