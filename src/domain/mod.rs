//! Domain layer: the tree, its nodes and the cursor over it
//!
//! This layer is independent of external concerns (no I/O beyond writing to
//! a caller-supplied sink, no CLI, no config loading).

pub mod arena;
pub mod error;
pub mod node;
pub mod render;
pub mod zipper;

pub use arena::{PreOrderIterator, TreeArena};
pub use error::{ZipperError, ZipperResult};
pub use node::{Branches, NodeRef, TreeNode};
pub use render::{Indented, TreeNodeConvert, INDENT_WIDTH};
pub use zipper::Zipper;
