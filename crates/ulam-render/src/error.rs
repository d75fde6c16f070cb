//! Error types for ulam-render.

use thiserror::Error;

/// Result type for ulam-render operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or rendering.
#[derive(Debug, Error)]
pub enum Error {
    /// Grid construction or configuration error
    #[error(transparent)]
    Grid(#[from] ulam_grid::Error),

    /// An environment variable held a value that could not be parsed.
    #[error("invalid value {value:?} for {name}: {reason}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
