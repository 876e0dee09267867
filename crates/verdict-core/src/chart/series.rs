//! Accuracy tables and model/top-K series derivation.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::error::ChartError;

/// One row of the accuracy summary CSV (`file,accuracy,samples`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AccuracyRow {
    /// Result label carrying a `-top<K>` marker, e.g. `8b-top4-res.json`.
    pub file: String,
    /// Accuracy percentage, 0-100.
    pub accuracy: f64,
    /// Sample count behind the measurement.
    pub samples: u64,
}

/// Accuracy rows keyed into per-model, top-K-ordered series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccuracyTable {
    series: BTreeMap<String, BTreeMap<u32, f64>>,
}

impl AccuracyTable {
    /// Loads a table from a CSV file with `file,accuracy,samples` headers.
    pub fn from_csv(path: &Path) -> Result<Self, ChartError> {
        let mut reader = csv::Reader::from_path(path).map_err(|source| ChartError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        let mut rows = Vec::new();
        for row in reader.deserialize::<AccuracyRow>() {
            rows.push(row.map_err(|source| ChartError::Csv {
                path: path.to_path_buf(),
                source,
            })?);
        }

        Self::from_rows(rows)
    }

    /// Builds a table from in-memory rows.
    pub fn from_rows(rows: Vec<AccuracyRow>) -> Result<Self, ChartError> {
        if rows.is_empty() {
            return Err(ChartError::EmptyTable);
        }

        let mut series: BTreeMap<String, BTreeMap<u32, f64>> = BTreeMap::new();
        for row in &rows {
            let (model, top_k) = parse_label(&row.file).ok_or_else(|| ChartError::BadLabel {
                label: row.file.clone(),
            })?;
            series.entry(model).or_default().insert(top_k, row.accuracy);
        }

        Ok(Self { series })
    }

    /// Replaces series keys per `(old, new)` pairs (display names).
    pub fn rename_models(&mut self, renames: &[(String, String)]) {
        for (old, new) in renames {
            if let Some(points) = self.series.remove(old) {
                self.series.insert(new.clone(), points);
            }
        }
    }

    /// Model names, sorted.
    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Number of models.
    pub fn model_count(&self) -> usize {
        self.series.len()
    }

    /// Distinct top-K values across all models, sorted.
    pub fn top_ks(&self) -> Vec<u32> {
        let mut ks: Vec<u32> = self
            .series
            .values()
            .flat_map(|points| points.keys().copied())
            .collect();
        ks.sort_unstable();
        ks.dedup();
        ks
    }

    /// The `(top_k, accuracy)` points for `model`, ordered by top-K.
    pub fn points(&self, model: &str) -> Option<&BTreeMap<u32, f64>> {
        self.series.get(model)
    }

    /// Accuracy for one `(model, top_k)` cell, if measured.
    pub fn accuracy(&self, model: &str, top_k: u32) -> Option<f64> {
        self.series.get(model).and_then(|points| points.get(&top_k)).copied()
    }

    /// `(min, max)` accuracy over the whole table.
    pub fn accuracy_bounds(&self) -> (f64, f64) {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for value in self.series.values().flat_map(|points| points.values()) {
            min = min.min(*value);
            max = max.max(*value);
        }
        (min, max)
    }
}

/// Splits a label like `8b-top4-res.json` into (`8b`, 4).
///
/// The model key is everything before the first `-top<digits>` marker, so
/// dashed model names (`bge-m3-top5`) keep their dashes.
pub fn parse_label(label: &str) -> Option<(String, u32)> {
    let mut search = 0;
    while let Some(pos) = label[search..].find("-top") {
        let idx = search + pos;
        let digits: String = label[idx + 4..]
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();

        if idx > 0
            && !digits.is_empty()
            && let Ok(top_k) = digits.parse()
        {
            return Some((label[..idx].to_string(), top_k));
        }

        search = idx + 4;
    }
    None
}
