//! CLI-level errors (wraps library errors)

use thiserror::Error;

use crate::errors::AstViewError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    View(#[from] AstViewError),

    #[error("serialization failed: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => exitcode::USAGE,
            CliError::Serialize(_) => exitcode::SOFTWARE,
            CliError::View(e) => match e {
                AstViewError::Io(_) => exitcode::NOINPUT,
                AstViewError::Json(_) | AstViewError::InvalidTree(_) => exitcode::DATAERR,
                AstViewError::Config(_) => exitcode::CONFIG,
            },
        }
    }
}
