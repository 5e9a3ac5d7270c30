//! Driver errors.

use nench_extractor::ExtractError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading reports or writing results.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// Reading a report or results file failed
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing an output file failed
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File or directory that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The extractor rejected a report
    #[error("{target}: {source}")]
    Extract {
        /// Report the error came from
        target: String,
        /// Extraction failure
        #[source]
        source: ExtractError,
    },

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for driver operations.
pub type Result<T> = std::result::Result<T, BenchmarkError>;
