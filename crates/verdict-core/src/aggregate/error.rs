//! Aggregation error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::dataset::DatasetError;
use crate::score::ScoreParseError;

/// Errors from summarizing result files.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// Failed to read a result file or write the summary.
    #[error("failed to read or write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Result file is not valid JSON.
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Result file top level is not an array.
    #[error("expected a JSON array at the top level of {path}")]
    NotAnArray { path: PathBuf },

    /// CSV writing failed.
    #[error("failed to write summary CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Directory listing failed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Why one result entry yielded no scorecard.
#[derive(Debug, Error)]
pub enum EntryError {
    /// The entry has no `choices[0].message.content` string (e.g. a persisted
    /// error entry).
    #[error("no choices[0].message.content in inference_result")]
    MissingContent,

    /// The content string did not parse as a scorecard.
    #[error(transparent)]
    Score(#[from] ScoreParseError),
}
