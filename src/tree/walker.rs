//! Traversals over generated forests
//!
//! Every root-to-leaf path of a forest is one complete alternative history;
//! `paths` is how consumers enumerate the traces to replay against a system
//! under test.

use crate::tree::node::Tree;

/// Values in pre-order (node before its children, children left to right).
pub fn flatten<T>(forest: &[Tree<T>]) -> Vec<&T> {
    let mut out = Vec::new();
    let mut stack: Vec<&Tree<T>> = forest.iter().rev().collect();
    while let Some(tree) = stack.pop() {
        out.push(&tree.value);
        stack.extend(tree.children.iter().rev());
    }
    out
}

/// Every root-to-leaf path, left to right.
pub fn paths<T: Clone>(forest: &[Tree<T>]) -> Vec<Vec<T>> {
    let mut out = Vec::new();
    let mut prefix: Vec<T> = Vec::new();
    let mut stack: Vec<(&Tree<T>, usize)> = forest.iter().rev().map(|t| (t, 0)).collect();
    while let Some((tree, level)) = stack.pop() {
        prefix.truncate(level);
        prefix.push(tree.value.clone());
        if tree.children.is_empty() {
            out.push(prefix.clone());
        } else {
            stack.extend(tree.children.iter().rev().map(|c| (c, level + 1)));
        }
    }
    out
}

/// Number of nodes.
pub fn size<T>(forest: &[Tree<T>]) -> usize {
    let mut count = 0;
    let mut stack: Vec<&Tree<T>> = forest.iter().collect();
    while let Some(tree) = stack.pop() {
        count += 1;
        stack.extend(tree.children.iter());
    }
    count
}

/// Length of the longest root-to-leaf path; zero for an empty forest.
pub fn depth<T>(forest: &[Tree<T>]) -> usize {
    let mut deepest = 0;
    let mut stack: Vec<(&Tree<T>, usize)> = forest.iter().map(|t| (t, 1)).collect();
    while let Some((tree, level)) = stack.pop() {
        deepest = deepest.max(level);
        stack.extend(tree.children.iter().map(|c| (c, level + 1)));
    }
    deepest
}

/// Values grouped by depth, breadth-first.
pub fn levels<T>(forest: &[Tree<T>]) -> Vec<Vec<&T>> {
    let mut out = Vec::new();
    let mut current: Vec<&Tree<T>> = forest.iter().collect();
    while !current.is_empty() {
        out.push(current.iter().map(|t| &t.value).collect());
        current = current.iter().flat_map(|t| t.children.iter()).collect();
    }
    out
}
