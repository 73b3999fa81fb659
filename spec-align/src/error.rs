//! Error types for spec-align.
//!
//! Alignment itself never fails: every disagreement between the two trees is
//! recorded as a [`Mismatch`](crate::Mismatch) node. These errors only cover
//! malformed inputs and the I/O around the engine.

use thiserror::Error;

use crate::content::Side;

/// Result type alias for spec-align operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur around an alignment.
#[derive(Error, Debug)]
pub enum Error {
    /// A mismatch was built with neither side present.
    #[error("mismatch must carry at least one side")]
    EmptyMismatch,

    /// A raw input tree already contains alignment results.
    #[error("{side} input already contains Mismatch or Annotation nodes")]
    AlignedInput { side: Side },

    /// A document root is not a record.
    #[error("{side} document root must be a Mapping or OrderedMapping, found {found}")]
    InvalidRoot { side: Side, found: &'static str },

    /// Fuzzy matching threshold outside `[0, 1)`.
    #[error("fuzzy threshold must lie in [0, 1), got {0}")]
    InvalidThreshold(f64),

    /// Key order of an ordered mapping does not list every key exactly once.
    #[error("invalid key order: {0}")]
    InvalidKeyOrder(String),

    /// A producer met a value it cannot turn into content.
    #[error("ingest error: {0}")]
    Ingest(String),

    /// JSON error from serde_json.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
