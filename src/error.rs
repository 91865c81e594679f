//! Error type for the fallible edges of the crate: file I/O, JSON
//! interchange, configuration, and algorithm-name parsing.
//!
//! Route computation itself never fails; degenerate input yields degenerate
//! (zero, NaN, or empty) output.

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
