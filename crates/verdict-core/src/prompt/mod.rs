//! Rubric prompt templating and dataset preparation.
//!
//! Preparation rewrites one field of each record into a full judging prompt
//! (the `content` field the dispatcher sends) and assigns 1-based sequential
//! ids, leaving every other field untouched.

pub mod error;


pub use error::PromptError;

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use crate::dataset::{self, DatasetError, Record};

/// Placeholder the template must contain.
pub const CONTENT_PLACEHOLDER: &str = "{content}";

/// Default judging rubric: five metrics, 0-10 each, bare-JSON reply.
pub const DEFAULT_RUBRIC: &str = "Grade the model answer against the reference answer on five metrics: \
accuracy, conciseness, relevance, completeness and hallucination. Each metric is scored out of 10. \
Reply with nothing but a JSON object of the form \
{\"accuracy\": 0, \"conciseness\": 0, \"relevance\": 0, \"completeness\": 0, \"hallucination\": 0}.\n\n\
Question, reference answer and model answer:\n{content}";

/// A judging prompt template with a `{content}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RubricTemplate {
    template: String,
}

impl Default for RubricTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_RUBRIC.to_string(),
        }
    }
}

impl RubricTemplate {
    /// Creates a template, rejecting strings without the placeholder.
    pub fn new(template: impl Into<String>) -> Result<Self, PromptError> {
        let template = template.into();
        if !template.contains(CONTENT_PLACEHOLDER) {
            return Err(PromptError::MissingPlaceholder);
        }
        Ok(Self { template })
    }

    /// Loads a template from a UTF-8 text file.
    pub fn from_file(path: &Path) -> Result<Self, PromptError> {
        let template = fs::read_to_string(path).map_err(|source| PromptError::TemplateIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(template)
    }

    /// Renders the judging prompt for one record's payload.
    pub fn render(&self, content: &str) -> String {
        self.template.replace(CONTENT_PLACEHOLDER, content)
    }
}

/// Counts from a preparation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrepareOutcome {
    /// Records rewritten into judging prompts.
    pub rewritten: usize,
    /// Records skipped because the source field was missing or not a string.
    pub skipped: usize,
    /// Input files contributing records.
    pub files: usize,
}

/// Rewrites `field` of every record in `input` into a judging prompt and
/// writes the result to `output`. Ids restart at 1.
pub fn prepare_file(
    input: &Path,
    output: &Path,
    field: &str,
    template: &RubricTemplate,
) -> Result<PrepareOutcome, PromptError> {
    let records = dataset::read_records(input)?;

    let mut next_id = 1;
    let (prepared, mut outcome) = rewrite_records(records, field, template, &mut next_id);
    outcome.files = 1;

    dataset::write_records(output, &prepared)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        rewritten = outcome.rewritten,
        skipped = outcome.skipped,
        "prepared record file"
    );
    Ok(outcome)
}

/// Prepares every `*.json` file under `dir` into one merged output array with
/// globally sequential ids. Files whose top level is not an array are warned
/// about and skipped.
pub fn prepare_dir_merged(
    dir: &Path,
    output: &Path,
    field: &str,
    template: &RubricTemplate,
) -> Result<PrepareOutcome, PromptError> {
    let mut merged = Vec::new();
    let mut outcome = PrepareOutcome::default();
    let mut next_id = 1;

    for path in dataset::json_files_in(dir)? {
        let records = match dataset::read_records(&path) {
            Ok(records) => records,
            Err(DatasetError::NotAnArray { .. }) => {
                warn!(file = %path.display(), "top level is not an array, skipped");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let (prepared, file_outcome) = rewrite_records(records, field, template, &mut next_id);
        merged.extend(prepared);
        outcome.rewritten += file_outcome.rewritten;
        outcome.skipped += file_outcome.skipped;
        outcome.files += 1;
    }

    dataset::write_records(output, &merged)?;

    info!(
        dir = %dir.display(),
        output = %output.display(),
        files = outcome.files,
        rewritten = outcome.rewritten,
        skipped = outcome.skipped,
        "prepared directory (merged)"
    );
    Ok(outcome)
}

/// Prepares every `*.json` file under `dir` into a mirror file under
/// `out_dir`, with ids restarting at 1 per file.
pub fn prepare_dir_per_file(
    dir: &Path,
    out_dir: &Path,
    field: &str,
    template: &RubricTemplate,
) -> Result<PrepareOutcome, PromptError> {
    let mut outcome = PrepareOutcome::default();

    for path in dataset::json_files_in(dir)? {
        // json_files_in only yields paths with a final component
        let file_name = path.file_name().expect("listed file has a name");
        let file_outcome = prepare_file(&path, &out_dir.join(file_name), field, template)?;
        outcome.rewritten += file_outcome.rewritten;
        outcome.skipped += file_outcome.skipped;
        outcome.files += 1;
    }

    Ok(outcome)
}

fn rewrite_records(
    records: Vec<Record>,
    field: &str,
    template: &RubricTemplate,
    next_id: &mut u64,
) -> (Vec<Record>, PrepareOutcome) {
    let mut prepared = Vec::with_capacity(records.len());
    let mut outcome = PrepareOutcome::default();

    for (idx, mut record) in records.into_iter().enumerate() {
        let Some(text) = record.field_str(field) else {
            warn!(index = idx + 1, field, "record missing source field, skipped");
            outcome.skipped += 1;
            continue;
        };

        let rendered = template.render(text);
        record.content = Some(Value::String(rendered));
        record.id = Some(*next_id);
        *next_id += 1;
        outcome.rewritten += 1;
        prepared.push(record);
    }

    (prepared, outcome)
}
