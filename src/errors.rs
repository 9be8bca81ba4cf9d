//! Crate-level errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AstViewError {
    #[error("malformed input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid syntax tree: {0}")]
    InvalidTree(String),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type AstViewResult<T> = Result<T, AstViewError>;
