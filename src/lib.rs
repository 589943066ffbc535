//! rszipper: a rose tree with a focus cursor.
//!
//! The [`Zipper`] owns an arena-backed tree and a cursor on its current node.
//! The cursor moves one step at a time (up to the parent or into an existing
//! child), new nodes are appended below the cursor, and iterate/map/fold
//! traversals run over the children of the focused node.
//!
//! ```
//! use rszipper::{Zipper, ZipperError};
//!
//! let mut z = Zipper::new(-1);
//! for v in [10, 20, 30] {
//!     z.enter_new_branch(v);
//!     z.step_back().unwrap();
//! }
//! let i = z.find_branch(|v| *v == 20).unwrap();
//! z.step_forward(i).unwrap();
//! assert_eq!(*z.value(), 20);
//! z.step_back().unwrap();
//! assert_eq!(z.step_back(), Err(ZipperError::CannotStepBack));
//! assert_eq!(z.fold_branches(0, |v, acc| v + acc), 60);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{
    Branches, NodeRef, TreeArena, TreeNodeConvert, Zipper, ZipperError, ZipperResult,
};
