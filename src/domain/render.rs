//! Textual renderings of a tree: the indented listing and `termtree` output.

use std::fmt;

use termtree::Tree;
use tracing::instrument;

use crate::domain::arena::TreeArena;
use crate::domain::node::NodeRef;
use crate::domain::zipper::Zipper;

/// Columns per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Indented pre-order listing of a subtree.
///
/// Each value is right-aligned in a field of `depth * INDENT_WIDTH` columns and
/// followed by a newline; a value wider than its field is written as is.
pub struct Indented<'a, T> {
    node: NodeRef<'a, T>,
    depth: usize,
}

impl<'a, T> Indented<'a, T> {
    pub fn new(node: NodeRef<'a, T>, depth: usize) -> Self {
        Self { node, depth }
    }
}

impl<T: fmt::Display> fmt::Display for Indented<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, depth) in self.node.descendants() {
            let width = (self.depth + depth) * INDENT_WIDTH;
            // pad the rendered text, not the value: user Display impls may ignore width
            let text = node.value().to_string();
            writeln!(f, "{:>width$}", text, width = width)?;
        }
        Ok(())
    }
}

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: fmt::Display> TreeNodeConvert for NodeRef<'_, T> {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        let leaves: Vec<_> = self.children().map(|c| c.to_tree_string()).collect();
        Tree::new(self.value().to_string()).with_leaves(leaves)
    }
}

impl<T: fmt::Display> TreeNodeConvert for TreeArena<T> {
    fn to_tree_string(&self) -> Tree<String> {
        self.root_node().to_tree_string()
    }
}

impl<T: fmt::Display> TreeNodeConvert for Zipper<T> {
    fn to_tree_string(&self) -> Tree<String> {
        self.tree().to_tree_string()
    }
}
