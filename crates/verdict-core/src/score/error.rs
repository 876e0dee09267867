//! Scorecard parsing error types.

use thiserror::Error;

/// Errors from parsing a judge reply into a [`ScoreCard`](super::ScoreCard).
#[derive(Debug, Error)]
pub enum ScoreParseError {
    /// The reply contains no `{ .. }` span at all.
    #[error("reply contains no JSON object")]
    NoJsonObject,

    /// The extracted span is not valid JSON.
    #[error("reply is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The extracted JSON is valid but not an object.
    #[error("reply JSON is not an object")]
    NotAnObject,
}
