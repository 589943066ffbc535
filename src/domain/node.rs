//! Tree nodes and read-only views over them.

use std::fmt;
use std::io;
use std::iter::FusedIterator;
use std::slice;

use generational_arena::Index;
use tracing::instrument;

use crate::domain::arena::{PreOrderIterator, TreeArena};
use crate::domain::render::Indented;

/// Tree node stored in a [`TreeArena`].
#[derive(Debug, Clone)]
pub struct TreeNode<T> {
    /// Payload of this node
    pub(crate) value: T,
    /// Index of the parent node in the arena, None for the root
    pub(crate) parent: Option<Index>,
    /// Indices of child nodes in append order
    pub(crate) children: Vec<Index>,
}

impl<T> TreeNode<T> {
    pub(crate) fn new(value: T, parent: Option<Index>) -> Self {
        Self {
            value,
            parent,
            children: Vec::new(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn parent(&self) -> Option<Index> {
        self.parent
    }

    pub fn children(&self) -> &[Index] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Borrowed handle on one node of a [`TreeArena`].
///
/// All child-level queries and traversals live here. They only ever look at
/// the immediate children of the node, never at grandchildren.
pub struct NodeRef<'a, T> {
    tree: &'a TreeArena<T>,
    index: Index,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("index", &self.index)
            .field("value", self.value())
            .field("children", &self.child_count())
            .finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(tree: &'a TreeArena<T>, index: Index) -> Self {
        Self { tree, index }
    }

    fn node(&self) -> &'a TreeNode<T> {
        self.tree.entry(self.index)
    }

    /// Arena index of this node.
    pub fn index(&self) -> Index {
        self.index
    }

    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.node().parent.map(|idx| NodeRef::new(self.tree, idx))
    }

    pub fn is_root(&self) -> bool {
        self.node().is_root()
    }

    pub fn child_count(&self) -> usize {
        self.node().children.len()
    }

    pub fn has_children(&self) -> bool {
        !self.node().children.is_empty()
    }

    pub fn child(&self, position: usize) -> Option<NodeRef<'a, T>> {
        self.node()
            .children
            .get(position)
            .map(|&idx| NodeRef::new(self.tree, idx))
    }

    pub fn children(&self) -> Branches<'a, T> {
        Branches {
            tree: self.tree,
            inner: self.node().children.iter(),
        }
    }

    /// Position of this node among its parent's children, None for the root.
    pub fn position(&self) -> Option<usize> {
        let parent = self.parent()?;
        parent.node().children.iter().position(|&idx| idx == self.index)
    }

    /// Pre-order walk of the subtree rooted here, with depths relative to this node.
    pub fn descendants(&self) -> PreOrderIterator<'a, T> {
        PreOrderIterator::new(self.tree, self.index)
    }

    /// Position of the first child whose value satisfies `predicate`.
    ///
    /// The predicate sees child values in order and is not called again after
    /// the first match. Returns None when no child matches.
    #[instrument(level = "trace", skip_all, fields(node = ?self.index))]
    pub fn find_branch<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.children().position(|child| predicate(child.value()))
    }

    pub fn foreach_child<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        self.children().for_each(|child| f(child.value()));
    }

    /// Applies `f` to every child value, collecting the results in child order.
    pub fn map_children<R, F>(&self, mut f: F) -> Vec<R>
    where
        F: FnMut(&T) -> R,
    {
        self.children().map(|child| f(child.value())).collect()
    }

    /// Left fold over child values: `acc = f(value, acc)` for each child in order.
    pub fn fold_children<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(&T, A) -> A,
    {
        self.children().fold(init, |acc, child| f(child.value(), acc))
    }

    /// Like [`fold_children`](Self::fold_children), stopping at the first error
    /// returned by `f`. The error is handed back unchanged.
    pub fn try_fold_children<A, E, F>(&self, init: A, mut f: F) -> Result<A, E>
    where
        F: FnMut(&T, A) -> Result<A, E>,
    {
        let mut acc = init;
        for child in self.children() {
            acc = f(child.value(), acc)?;
        }
        Ok(acc)
    }

    /// Writes the subtree as indented text, starting at indentation level `depth`.
    pub fn print_tree<W: io::Write>(&self, output: &mut W, depth: usize) -> io::Result<()>
    where
        T: fmt::Display,
    {
        write!(output, "{}", Indented::new(*self, depth))
    }
}

/// Iterator over the children of one node, in append order.
pub struct Branches<'a, T> {
    tree: &'a TreeArena<T>,
    inner: slice::Iter<'a, Index>,
}

impl<T> Clone for Branches<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Branches<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|&idx| NodeRef::new(self.tree, idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Branches<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|&idx| NodeRef::new(self.tree, idx))
    }
}

impl<T> ExactSizeIterator for Branches<'_, T> {}

impl<T> FusedIterator for Branches<'_, T> {}
