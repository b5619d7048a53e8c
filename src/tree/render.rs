//! Text rendering of forests for debugging and CLI output.

use crate::tree::node::Tree;
use std::fmt::{self, Display, Write};

/// Render a forest as an indented tree, one root after another.
pub fn draw_forest<T: Display>(forest: &[Tree<T>]) -> String {
    let mut out = String::new();
    for tree in forest {
        // Writing into a String cannot fail.
        let _ = draw_into(&mut out, tree);
    }
    out
}

fn draw_into<T: Display>(out: &mut String, tree: &Tree<T>) -> fmt::Result {
    writeln!(out, "{}", tree.value)?;
    draw_children(out, &tree.children, "")
}

fn draw_children<T: Display>(out: &mut String, children: &[Tree<T>], prefix: &str) -> fmt::Result {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let (branch, extension) = if last {
            ("`-- ", "    ")
        } else {
            ("+-- ", "|   ")
        };
        writeln!(out, "{}{}{}", prefix, branch, child.value)?;
        draw_children(out, &child.children, &format!("{}{}", prefix, extension))?;
    }
    Ok(())
}

impl<T: Display> Tree<T> {
    /// Render this tree alone.
    pub fn draw(&self) -> String {
        draw_forest(std::slice::from_ref(self))
    }
}
