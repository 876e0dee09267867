//! Score aggregation: result files -> per-file averages -> summary CSV.
//!
//! Result files are the arrays the dispatcher persists. Each entry carries an
//! OpenAI-shaped completion; the scorecard lives in
//! `inference_result.choices[0].message.content` as JSON text. Entries that
//! fail extraction (including persisted error entries) are skipped with a
//! warning and counted, never averaged as zeros.

pub mod error;


pub use error::{AggregateError, EntryError};

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use crate::dataset;
use crate::score::{Metric, ScoreCard};

/// Per-metric and total averages for one result file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSummary {
    /// 1-based position among successfully summarized files.
    pub index: usize,
    /// File name without its directory.
    pub file_name: String,
    pub accuracy_avg: f64,
    pub conciseness_avg: f64,
    pub relevance_avg: f64,
    pub completeness_avg: f64,
    pub hallucination_avg: f64,
    /// Mean over every individual metric value in the file.
    pub total_avg: f64,
    /// Entries that yielded a scorecard.
    pub record_count: usize,
    /// Entries skipped (error entries, malformed replies).
    pub parse_failures: usize,
}

impl FileSummary {
    /// Returns the average for `metric`.
    pub fn metric_avg(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Accuracy => self.accuracy_avg,
            Metric::Conciseness => self.conciseness_avg,
            Metric::Relevance => self.relevance_avg,
            Metric::Completeness => self.completeness_avg,
            Metric::Hallucination => self.hallucination_avg,
        }
    }
}

/// Summarizes one result file. `index` is left at 0; directory traversal
/// assigns it.
pub fn summarize_file(path: &Path) -> Result<FileSummary, AggregateError> {
    let text = fs::read_to_string(path).map_err(|source| AggregateError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&text).map_err(|source| AggregateError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(entries) = value.as_array() else {
        return Err(AggregateError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    let mut sums = [0u64; 5];
    let mut record_count = 0usize;
    let mut parse_failures = 0usize;

    for (idx, entry) in entries.iter().enumerate() {
        match scorecard_from_entry(entry) {
            Ok(card) => {
                for (slot, metric) in sums.iter_mut().zip(Metric::ALL) {
                    *slot += card.get(metric) as u64;
                }
                record_count += 1;
            }
            Err(e) => {
                warn!(
                    file = %path.display(),
                    entry = idx,
                    error = %e,
                    "skipping entry without a scorecard"
                );
                parse_failures += 1;
            }
        }
    }

    let avg = |sum: u64| {
        if record_count == 0 {
            0.0
        } else {
            round2(sum as f64 / record_count as f64)
        }
    };

    let total_avg = if record_count == 0 {
        0.0
    } else {
        round2(sums.iter().sum::<u64>() as f64 / (record_count * Metric::ALL.len()) as f64)
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(FileSummary {
        index: 0,
        file_name,
        accuracy_avg: avg(sums[0]),
        conciseness_avg: avg(sums[1]),
        relevance_avg: avg(sums[2]),
        completeness_avg: avg(sums[3]),
        hallucination_avg: avg(sums[4]),
        total_avg,
        record_count,
        parse_failures,
    })
}

/// Summarizes every `*.json` file under `dir`, in sorted order.
///
/// Files that fail wholesale are warned about and skipped; surviving files
/// get 1-based sequential indexes.
pub fn summarize_dir(dir: &Path) -> Result<Vec<FileSummary>, AggregateError> {
    let mut summaries = Vec::new();

    for path in dataset::json_files_in(dir)? {
        match summarize_file(&path) {
            Ok(mut summary) => {
                summary.index = summaries.len() + 1;
                info!(
                    file = %summary.file_name,
                    records = summary.record_count,
                    failures = summary.parse_failures,
                    total_avg = summary.total_avg,
                    "summarized result file"
                );
                summaries.push(summary);
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "skipping unreadable result file");
            }
        }
    }

    Ok(summaries)
}

/// Writes the 8-column summary CSV: index, file, the five metric averages,
/// total average.
pub fn write_summary_csv(path: &Path, summaries: &[FileSummary]) -> Result<(), AggregateError> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["index".to_string(), "file".to_string()];
    header.extend(Metric::ALL.iter().map(|m| m.summary_column().to_string()));
    header.push("total_avg".to_string());
    writer.write_record(&header)?;

    for summary in summaries {
        let mut row = vec![summary.index.to_string(), summary.file_name.clone()];
        row.extend(
            Metric::ALL
                .iter()
                .map(|m| format!("{:.2}", summary.metric_avg(*m))),
        );
        row.push(format!("{:.2}", summary.total_avg));
        writer.write_record(&row)?;
    }

    writer.flush().map_err(|source| AggregateError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), files = summaries.len(), "wrote summary CSV");
    Ok(())
}

fn scorecard_from_entry(entry: &Value) -> Result<ScoreCard, EntryError> {
    let content = entry
        .get("inference_result")
        .and_then(|r| r.get("choices"))
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .ok_or(EntryError::MissingContent)?;

    Ok(ScoreCard::parse(content)?)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
