use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::node::{NodeRef, TreeNode};

/// Arena-based rose tree.
///
/// Every node lives in one generational arena and refers to its parent and
/// children by index, so appending a child never moves an existing node and
/// parent links stay valid for the lifetime of the tree. Nodes are never
/// removed; the tree always has a root.
#[derive(Debug, Clone)]
pub struct TreeArena<T> {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode<T>>,
    /// Index of the root node
    root: Index,
}

impl<T: Default> Default for TreeArena<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> TreeArena<T> {
    pub fn new(root_value: T) -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(TreeNode::new(root_value, None));
        Self { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    /// Appends a new last child under `parent` and returns its index.
    #[instrument(level = "trace", skip(self, value))]
    pub(crate) fn append_child(&mut self, parent: Index, value: T) -> Index {
        let node_idx = self.arena.insert(TreeNode::new(value, Some(parent)));
        self.arena[parent].children.push(node_idx);
        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode<T>> {
        self.arena.get(idx)
    }

    pub fn node(&self, idx: Index) -> Option<NodeRef<'_, T>> {
        self.arena.get(idx).map(|_| NodeRef::new(self, idx))
    }

    pub fn root_node(&self) -> NodeRef<'_, T> {
        NodeRef::new(self, self.root)
    }

    /// Node lookup for indices handed out by this arena.
    pub(crate) fn entry(&self, idx: Index) -> &TreeNode<T> {
        &self.arena[idx]
    }

    pub(crate) fn entry_mut(&mut self, idx: Index) -> &mut TreeNode<T> {
        &mut self.arena[idx]
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of parent links between `idx` and the root.
    #[instrument(level = "trace", skip(self))]
    pub fn depth_of(&self, idx: Index) -> usize {
        let mut depth = 0;
        let mut current = self.arena.get(idx).and_then(|node| node.parent);
        while let Some(parent) = current {
            depth += 1;
            current = self.arena.get(parent).and_then(|node| node.parent);
        }
        depth
    }

    /// Number of levels in the tree; a lone root has height 1.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        self.iter().map(|(_, depth)| depth + 1).max().unwrap_or(0)
    }

    /// Values of all nodes without children, in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_values(&self) -> Vec<&T> {
        self.iter()
            .filter(|(node, _)| !node.has_children())
            .map(|(node, _)| node.value())
            .collect()
    }

    /// Pre-order walk of the whole tree, yielding each node with its depth.
    pub fn iter(&self) -> PreOrderIterator<'_, T> {
        PreOrderIterator::new(self, self.root)
    }
}

/// Depth-first, pre-order iterator with an explicit stack.
///
/// Depths are relative to the node the walk started from.
pub struct PreOrderIterator<'a, T> {
    tree: &'a TreeArena<T>,
    stack: Vec<(Index, usize)>,
}

impl<'a, T> PreOrderIterator<'a, T> {
    pub(crate) fn new(tree: &'a TreeArena<T>, start: Index) -> Self {
        let mut stack = Vec::new();
        if tree.arena.contains(start) {
            stack.push((start, 0));
        }
        Self { tree, stack }
    }
}

impl<'a, T> Iterator for PreOrderIterator<'a, T> {
    type Item = (NodeRef<'a, T>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (current_idx, depth) = self.stack.pop()?;
        let node = self.tree.entry(current_idx);
        // Push children in reverse order for left-to-right traversal
        for &child in node.children.iter().rev() {
            self.stack.push((child, depth + 1));
        }
        Some((NodeRef::new(self.tree, current_idx), depth))
    }
}
