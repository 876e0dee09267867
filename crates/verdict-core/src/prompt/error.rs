//! Prompt templating error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::dataset::DatasetError;

/// Errors from template construction and dataset preparation.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The template has no `{content}` placeholder.
    #[error("template does not contain the {{content}} placeholder")]
    MissingPlaceholder,

    /// Failed to read the template file.
    #[error("failed to read template {path}: {source}")]
    TemplateIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Underlying dataset I/O failure.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
