//! Dataset error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading and writing record arrays.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Failed to read a file or directory entry.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid JSON (or records have the wrong shape).
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The top level of the file is not a JSON array.
    #[error("expected a JSON array at the top level of {path}")]
    NotAnArray { path: PathBuf },

    /// Expected a directory.
    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Failed to serialize records.
    #[error("failed to serialize records for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write the output file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
