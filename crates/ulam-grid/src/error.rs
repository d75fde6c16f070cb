//! Error types for ulam-grid.

use thiserror::Error;

/// Result type for ulam-grid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or aggregating a grid.
#[derive(Debug, Error)]
pub enum Error {
    /// The supplied sequence cannot be laid out.
    #[error("invalid sequence: {0}")]
    InvalidSequence(String),

    /// `counters_mode` is neither `count` nor `sum`.
    #[error("unsupported counters mode {0:?} (expected \"count\" or \"sum\")")]
    UnsupportedCountersMode(String),

    /// The padded view of a hand-built grid would be too large to assemble.
    #[error("padded view of {width} x {height} cells exceeds the limit of {limit} cells")]
    ViewTooLarge { width: u64, height: u64, limit: usize },

    /// A populated coordinate has no spiral index.
    #[error("coordinate {0} lies beyond the outermost indexable ring")]
    OutOfSpiral(ulam_spiral::GridCoord),

    /// Spiral arithmetic rejected its input.
    #[error("spiral error: {0}")]
    Spiral(#[from] ulam_spiral::Error),

    /// JSON decoding failed
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
