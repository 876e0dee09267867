//! JSON record arrays shared across the evaluation pipeline.
//!
//! Every stage reads and writes flat JSON arrays of objects. Only `id` and
//! `content` are interpreted; all other fields ride along untouched so a
//! prepared file keeps whatever metadata the upstream export carried.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::DatasetError;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of an evaluation record array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Sequential id assigned during preparation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The judging prompt (after preparation) or raw payload (before).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,

    /// Every other field, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    /// Looks up a field by name and returns it only if it is a string.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        match name {
            "content" => self.content.as_ref().and_then(Value::as_str),
            _ => self.extra.get(name).and_then(Value::as_str),
        }
    }
}

/// Reads a record array from `path`. The top level MUST be a JSON array.
pub fn read_records(path: &Path) -> Result<Vec<Record>, DatasetError> {
    let value = read_json(path)?;
    if !value.is_array() {
        return Err(DatasetError::NotAnArray {
            path: path.to_path_buf(),
        });
    }
    serde_json::from_value(value).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a record array from `path`, wrapping a single top-level object into a
/// one-element array.
pub fn read_records_lenient(path: &Path) -> Result<Vec<Record>, DatasetError> {
    let value = read_json(path)?;
    let value = match value {
        Value::Array(_) => value,
        other => Value::Array(vec![other]),
    };
    serde_json::from_value(value).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `records` to `path` as a pretty-printed JSON array, creating parent
/// directories as needed.
pub fn write_records(path: &Path, records: &[Record]) -> Result<(), DatasetError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| DatasetError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let text =
        serde_json::to_string_pretty(records).map_err(|source| DatasetError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;

    fs::write(path, text).map_err(|source| DatasetError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Lists the `*.json` files directly under `dir`, sorted by file name.
pub fn json_files_in(dir: &Path) -> Result<Vec<PathBuf>, DatasetError> {
    if !dir.is_dir() {
        return Err(DatasetError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    for entry in fs::read_dir(dir).map_err(|source| DatasetError::Io {
        path: dir.to_path_buf(),
        source,
    })? {
        let entry = entry.map_err(|source| DatasetError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_file()
            && let Some(ext) = path.extension()
            && let Some(ext_str) = ext.to_str()
            && ext_str.eq_ignore_ascii_case("json")
        {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn read_json(path: &Path) -> Result<Value, DatasetError> {
    let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
