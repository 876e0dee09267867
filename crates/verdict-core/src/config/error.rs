//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Concurrency value is out of range (1..=1000).
    #[error("invalid concurrency '{value}': must be between 1 and 1000")]
    InvalidConcurrency { value: String },

    /// Concurrency string could not be parsed as a number.
    #[error("failed to parse concurrency '{value}': {source}")]
    ConcurrencyParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Timeout value is out of range.
    #[error("invalid timeout '{value}': must be at least 1 second")]
    InvalidTimeout { value: String },

    /// Timeout string could not be parsed as a number.
    #[error("failed to parse timeout '{value}': {source}")]
    TimeoutParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
