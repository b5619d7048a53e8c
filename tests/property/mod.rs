//! Property-based tests for the generator combinators

mod random_state;
mod sequencing_laws;
