//! Incrementally persisted JSON array of judge results.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::warn;

use super::error::DispatchError;

/// Append-only guard over a JSON array file.
///
/// The existing array is read once when the sink opens; every append rewrites
/// the whole file through a temp-file rename, so the file on disk is a valid
/// JSON array containing every completed entry at all times. A run can be
/// killed at any point without losing persisted results.
#[derive(Debug)]
pub struct ResultSink {
    path: PathBuf,
    temp_path: PathBuf,
    entries: Mutex<Vec<Value>>,
}

impl ResultSink {
    /// Opens (or creates) the sink at `path` and writes the initial state.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, DispatchError> {
        let path = path.into();

        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(text) => match serde_json::from_str::<Value>(&text) {
                Ok(Value::Array(items)) => items,
                Ok(other) => {
                    warn!(
                        path = %path.display(),
                        "existing results are not an array, wrapping"
                    );
                    vec![other]
                }
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "existing results are corrupt, starting fresh"
                    );
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(DispatchError::SinkIo { path, source }),
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| DispatchError::SinkIo {
                    path: path.clone(),
                    source,
                })?;
        }

        let temp_path = temp_path_for(&path);
        let sink = Self {
            path,
            temp_path,
            entries: Mutex::new(entries),
        };

        {
            let entries = sink.entries.lock().await;
            sink.write_all(&entries).await?;
        }

        Ok(sink)
    }

    /// The output file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries currently persisted.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Returns `true` if no entries are persisted.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Appends one entry and rewrites the file. Returns the new length.
    pub async fn append<T: serde::Serialize>(&self, entry: &T) -> Result<usize, DispatchError> {
        let value = serde_json::to_value(entry).map_err(DispatchError::Serialize)?;

        let mut entries = self.entries.lock().await;
        entries.push(value);
        self.write_all(&entries).await?;
        Ok(entries.len())
    }

    async fn write_all(&self, entries: &[Value]) -> Result<(), DispatchError> {
        let bytes = serde_json::to_vec_pretty(entries).map_err(DispatchError::Serialize)?;

        let io_err = |source| DispatchError::SinkIo {
            path: self.path.clone(),
            source,
        };

        let mut file = tokio::fs::File::create(&self.temp_path)
            .await
            .map_err(io_err)?;
        file.write_all(&bytes).await.map_err(io_err)?;
        file.sync_all().await.map_err(io_err)?;

        tokio::fs::rename(&self.temp_path, &self.path)
            .await
            .map_err(io_err)
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "results.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
