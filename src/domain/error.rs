//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Navigation failures reported by the zipper.
///
/// A failed move leaves the tree and the cursor untouched, with the single
/// exception of [`Zipper::step_back_n`](crate::domain::Zipper::step_back_n),
/// which keeps the steps it managed to take before hitting the root.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZipperError {
    #[error("cannot step back: cursor is at the root")]
    CannotStepBack,

    #[error("invalid branch {index}: focused node has {available} branch(es)")]
    InvalidBranch { index: usize, available: usize },
}

/// Result type for zipper operations.
pub type ZipperResult<T> = Result<T, ZipperError>;
