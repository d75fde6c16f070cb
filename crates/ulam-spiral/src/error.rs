//! Error types for ulam-spiral.

use thiserror::Error;

/// Result type for ulam-spiral operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in spiral utilities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Primality is only defined here for n >= 1.
    #[error("primality test requires a positive integer, got {0}")]
    NonPositive(i64),
}
