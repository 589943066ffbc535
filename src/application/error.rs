//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::ZipperError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Zipper(#[from] ZipperError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("invalid setting {field}: {reason}")]
    InvalidSettings { field: String, reason: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
