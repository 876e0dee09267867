//! Verdict library crate (used by the CLI and integration tests).
//!
//! Offline evaluation toolkit for RAG pipelines, organized as four stages
//! over flat JSON files:
//!
//! 1. **prepare** ([`prompt`]) - rewrite a field of each record into a
//!    judging prompt and assign sequential ids.
//! 2. **score** ([`dispatch`]) - fan prompts out to a chat-completion judge
//!    with a bounded worker pool, persisting every outcome incrementally.
//! 3. **aggregate** ([`aggregate`]) - parse the judge's scorecards and write
//!    a per-file averages summary CSV.
//! 4. **chart** ([`chart`]) - render accuracy-vs-top-K comparison charts.
//!
//! # Public API Surface
//!
//! - [`Config`], [`ConfigError`] - environment-backed settings
//! - [`Record`] and the `dataset` readers/writers - record-array I/O
//! - [`RubricTemplate`], `prepare_*` - prompt preparation
//! - [`Dispatcher`], [`ChatJudge`], [`GenaiJudge`], [`ResultSink`] - the
//!   concurrent scoring core
//! - [`ScoreCard`], [`Metric`] - scorecard parsing
//! - [`FileSummary`], `summarize_*`, [`write_summary_csv`] - aggregation
//! - [`AccuracyTable`], `render_*` - charts
//!
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod aggregate;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod dispatch;
pub mod prompt;
pub mod score;

pub use aggregate::{AggregateError, EntryError, FileSummary, summarize_dir, summarize_file, write_summary_csv};
pub use chart::{
    AccuracyRow, AccuracyTable, ChartError, parse_label, render_bar_chart, render_heatmap,
    render_line_chart,
};
pub use config::{Config, ConfigError};
pub use dataset::{
    DatasetError, Record, json_files_in, read_records, read_records_lenient, write_records,
};
#[cfg(any(test, feature = "mock"))]
pub use dispatch::MockJudge;
pub use dispatch::{
    ChatJudge, DispatchError, DispatchProgress, DispatchSummary, Dispatcher, ErrorRecord,
    GenaiJudge, MAX_CONCURRENCY, ResultSink, ScoreJob, ScoreRecord, adapt_chat_response,
    completion_from_text, jobs_from_records,
};
pub use prompt::{
    CONTENT_PLACEHOLDER, DEFAULT_RUBRIC, PrepareOutcome, PromptError, RubricTemplate,
    prepare_dir_merged, prepare_dir_per_file, prepare_file,
};
pub use score::{MAX_SCORE, Metric, ScoreCard, ScoreParseError};
