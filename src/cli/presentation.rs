//! CLI presentation: text and json formatters for generated forests.

use crate::error::TracegenError;
use crate::tree::{draw_forest, walker, Tree};
use serde::Serialize;
use std::fmt::Display;

pub fn format_forest_text<T: Display>(forest: &[Tree<T>]) -> String {
    if forest.is_empty() {
        return "(empty forest)".to_string();
    }
    draw_forest(forest).trim_end().to_string()
}

pub fn format_forest_json<T: Serialize>(forest: &[Tree<T>]) -> Result<String, TracegenError> {
    Ok(serde_json::to_string_pretty(forest)?)
}

/// One line per root-to-leaf history, steps joined by " -> ".
pub fn format_paths_text<T: Display + Clone>(forest: &[Tree<T>]) -> String {
    walker::paths(forest)
        .iter()
        .map(|path| {
            path.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" -> ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
