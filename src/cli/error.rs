//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<clap::Error> for CliError {
    fn from(e: clap::Error) -> Self {
        Self::InvalidArgs(e.to_string())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Io { .. } => crate::exitcode::IOERR,
            CliError::Application(e) => match e {
                ApplicationError::Config { .. } | ApplicationError::InvalidSettings { .. } => {
                    crate::exitcode::CONFIG
                }
                ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
                ApplicationError::Zipper(_) => crate::exitcode::SOFTWARE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ZipperError;

    #[test]
    fn test_exit_codes() {
        let config = CliError::from(ApplicationError::Config {
            message: "bad".into(),
        });
        assert_eq!(config.exit_code(), crate::exitcode::CONFIG);

        let nav = CliError::from(ApplicationError::from(ZipperError::CannotStepBack));
        assert_eq!(nav.exit_code(), crate::exitcode::SOFTWARE);
        assert_eq!(nav.to_string(), "cannot step back: cursor is at the root");

        let io = CliError::io("write tree", std::io::Error::other("closed"));
        assert_eq!(io.exit_code(), crate::exitcode::IOERR);
    }

    #[test]
    fn test_setting_and_operation_failures_keep_their_context() {
        let invalid = CliError::from(ApplicationError::InvalidSettings {
            field: "demo.reset_every".into(),
            reason: "must be at least 1".into(),
        });
        assert_eq!(invalid.exit_code(), crate::exitcode::CONFIG);
        assert_eq!(invalid.to_string(), "invalid setting demo.reset_every: must be at least 1");

        let failed = CliError::from(ApplicationError::OperationFailed {
            context: "read config: /tmp/rszipper.toml".into(),
            source: Box::new(std::io::Error::other("denied")),
        });
        assert_eq!(failed.exit_code(), crate::exitcode::IOERR);
        let CliError::Application(inner) = &failed else {
            panic!("expected application error, got {failed:?}");
        };
        let source = std::error::Error::source(inner).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("denied"));
    }

    #[test]
    fn test_unparsable_argument_maps_to_usage() {
        use crate::cli::Cli;
        use clap::Parser;

        let err = Cli::try_parse_from(["rszipper", "demo", "--reset-every", "abc"]).unwrap_err();
        assert!(err.use_stderr());

        let err = CliError::from(err);
        assert!(matches!(err, CliError::InvalidArgs(_)));
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
        assert!(err.to_string().contains("--reset-every"));
    }

    #[test]
    fn test_help_is_not_a_usage_error() {
        use crate::cli::Cli;
        use clap::Parser;

        let err = Cli::try_parse_from(["rszipper", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }
}
