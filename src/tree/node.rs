//! Rose tree node with an ordered, arbitrarily wide child list.

use serde::{Deserialize, Serialize};

/// A labeled rose tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tree<T> {
    /// Payload held at this node
    pub value: T,
    /// Ordered subtrees; empty for a leaf
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Tree<T>>,
}

/// Ordered sequence of root-level trees.
pub type Forest<T> = Vec<Tree<T>>;

impl<T> Tree<T> {
    /// Build a node from its value and ordered children.
    pub fn node(value: T, children: Forest<T>) -> Self {
        Self { value, children }
    }

    /// Build a single-node tree.
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

// A single-line history is as deep as it is long; unlink it level by level
// so dropping never recurses.
impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut tree) = pending.pop() {
            pending.append(&mut tree.children);
        }
    }
}
