//! CLI output: error mapping from library errors to the CLI surface.

use crate::error::TracegenError;

/// Map library errors to a string for CLI output.
pub fn map_error(e: &TracegenError) -> String {
    e.to_string()
}
