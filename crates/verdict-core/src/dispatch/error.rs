//! Dispatch error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from judge dispatch and result persistence.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Upstream provider call failed.
    #[error("provider error: {0}")]
    Provider(String),

    /// Reading or writing the result sink failed.
    #[error("result sink I/O failed at {path}: {source}")]
    SinkIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A result entry could not be serialized.
    #[error("failed to serialize result entry: {0}")]
    Serialize(#[source] serde_json::Error),
}
