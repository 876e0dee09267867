//! Chart error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading accuracy tables and rendering charts.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Failed to read or parse the accuracy CSV.
    #[error("failed to read accuracy table {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The table has no rows.
    #[error("accuracy table is empty")]
    EmptyTable,

    /// A row label carries no `-top<K>` marker.
    #[error("label '{label}' has no -top<K> marker")]
    BadLabel { label: String },

    /// The plotting backend failed.
    #[error("chart rendering failed: {0}")]
    Render(String),
}
