//! Unified error type for the crate.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for order-data operations.
#[derive(Debug, Error)]
pub enum OrderDataError {
    /// The input file could not be opened.
    #[error("cannot open data file {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// CSV reading or row deserialization failed (includes malformed numerics).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
