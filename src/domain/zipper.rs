//! Cursor-based navigation over a [`TreeArena`].

use std::fmt;
use std::io;

use generational_arena::Index;
use tracing::{instrument, trace};

use crate::domain::arena::TreeArena;
use crate::domain::error::{ZipperError, ZipperResult};
use crate::domain::node::{Branches, NodeRef};
use crate::domain::render::Indented;

/// A rose tree together with a cursor on its current node.
///
/// The cursor starts on the root. It moves one step at a time: up to the
/// parent, or down into an existing child. New nodes are only ever created as
/// the last child of the current node, and the cursor always lands on them.
///
/// ```
/// use rszipper::Zipper;
///
/// let mut z = Zipper::new(-1);
/// z.enter_new_branch(0);
/// z.enter_new_branch(1);
/// assert_eq!(z.depth(), 2);
/// z.step_back().unwrap();
/// assert_eq!(*z.value(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Zipper<T> {
    tree: TreeArena<T>,
    cursor: Index,
    depth: usize,
}

impl<T: Default> Default for Zipper<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Zipper<T> {
    pub fn new(root_value: T) -> Self {
        let tree = TreeArena::new(root_value);
        let cursor = tree.root();
        Self {
            tree,
            cursor,
            depth: 0,
        }
    }

    /// The underlying tree, for read-only inspection.
    pub fn tree(&self) -> &TreeArena<T> {
        &self.tree
    }

    pub fn root(&self) -> NodeRef<'_, T> {
        self.tree.root_node()
    }

    /// The focused node.
    pub fn current(&self) -> NodeRef<'_, T> {
        NodeRef::new(&self.tree, self.cursor)
    }

    pub fn value(&self) -> &T {
        &self.tree.entry(self.cursor).value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.tree.entry_mut(self.cursor).value
    }

    /// Number of successful `step_back` calls needed to reach the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of nodes in the tree, root included.
    pub fn len(&self) -> usize {
        self.tree.node_count()
    }

    /// Always false: a zipper holds at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn can_step_back(&self) -> bool {
        self.tree.entry(self.cursor).parent.is_some()
    }

    #[instrument(level = "trace", skip(self), fields(depth = self.depth))]
    pub fn step_back(&mut self) -> ZipperResult<()> {
        let parent = self
            .tree
            .entry(self.cursor)
            .parent
            .ok_or(ZipperError::CannotStepBack)?;
        self.cursor = parent;
        self.depth -= 1;
        Ok(())
    }

    /// Steps back `n` times.
    ///
    /// Stops with [`ZipperError::CannotStepBack`] as soon as the root is
    /// reached; steps already taken are kept, so the cursor ends on the root.
    #[instrument(level = "trace", skip(self), fields(depth = self.depth))]
    pub fn step_back_n(&mut self, n: usize) -> ZipperResult<()> {
        for _ in 0..n {
            self.step_back()?;
        }
        Ok(())
    }

    pub fn can_step_forward(&self) -> bool {
        !self.tree.entry(self.cursor).children.is_empty()
    }

    /// Position of the first branch whose value satisfies `predicate`.
    pub fn find_branch<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.current().find_branch(predicate)
    }

    /// Moves the cursor into the branch at `index`.
    #[instrument(level = "trace", skip(self), fields(depth = self.depth))]
    pub fn step_forward(&mut self, index: usize) -> ZipperResult<()> {
        let children = &self.tree.entry(self.cursor).children;
        let child = children
            .get(index)
            .copied()
            .ok_or(ZipperError::InvalidBranch {
                index,
                available: children.len(),
            })?;
        self.cursor = child;
        self.depth += 1;
        Ok(())
    }

    /// Appends `value` as the new last branch of the focused node and moves into it.
    #[instrument(level = "trace", skip(self, value), fields(depth = self.depth))]
    pub fn enter_new_branch(&mut self, value: T) {
        self.cursor = self.tree.append_child(self.cursor, value);
        self.depth += 1;
        trace!(nodes = self.tree.node_count(), "entered new branch");
    }

    /// Read-only view of the focused node's branches.
    pub fn available_branches(&self) -> Branches<'_, T> {
        self.current().children()
    }

    pub fn foreach_branch<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.current().foreach_child(f)
    }

    pub fn map_branches<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(&T) -> R,
    {
        self.current().map_children(f)
    }

    pub fn fold_branches<A, F>(&self, init: A, f: F) -> A
    where
        F: FnMut(&T, A) -> A,
    {
        self.current().fold_children(init, f)
    }

    pub fn try_fold_branches<A, E, F>(&self, init: A, f: F) -> Result<A, E>
    where
        F: FnMut(&T, A) -> Result<A, E>,
    {
        self.current().try_fold_children(init, f)
    }

    /// Writes the whole tree, from the root, as an indented listing.
    pub fn print_tree<W: io::Write>(&self, output: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
    {
        self.root().print_tree(output, 0)
    }
}

impl<T: fmt::Display> fmt::Display for Zipper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Indented::new(self.root(), 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_tracks_moves() {
        let mut z = Zipper::new(0u8);
        z.enter_new_branch(1);
        z.enter_new_branch(2);
        assert_eq!(z.depth(), 2);
        assert_eq!(z.tree().depth_of(z.current().index()), 2);

        z.step_back().unwrap();
        z.step_forward(0).unwrap();
        assert_eq!(z.depth(), 2);
        assert_eq!(*z.value(), 2);
    }

    #[test]
    fn test_value_mut_edits_focused_node_only() {
        let mut z = Zipper::new(String::from("root"));
        z.enter_new_branch(String::from("child"));
        z.value_mut().push_str("-edited");
        z.step_back().unwrap();

        assert_eq!(z.value(), "root");
        assert_eq!(z.map_branches(|v| v.clone()), vec!["child-edited".to_string()]);
    }

    #[test]
    fn test_failed_step_forward_keeps_cursor() {
        let mut z = Zipper::new(0);
        z.enter_new_branch(1);
        z.step_back().unwrap();

        let err = z.step_forward(1).unwrap_err();
        assert_eq!(err, ZipperError::InvalidBranch { index: 1, available: 1 });
        assert!(z.current().is_root());
        assert_eq!(z.depth(), 0);
    }
}
