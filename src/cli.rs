//! CLI domain: parse, route and output only.
//! Generation logic lives in the library; the route table only runs programs
//! and formats their forests.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{format_forest_json, format_forest_text, format_paths_text};
pub use route::RunContext;
