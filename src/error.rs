//! Error types for redmark library.

use std::io;
use thiserror::Error;

/// Result type alias for redmark operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during markup conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error deserializing or serializing a document tree.
    #[error("Document JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Frame nesting exceeded the configured recursion bound.
    ///
    /// Raised instead of recursing unboundedly when the input tree is
    /// pathologically deep (or cyclic through a corrupted producer).
    #[error("Frame nesting exceeds the depth limit of {0}")]
    DepthExceeded(usize),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
