use std::time::Duration;

use async_openai::types::chat::CreateChatCompletionResponse;
use serde::{Deserialize, Serialize};

/// One judging request: the prepared prompt for a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreJob {
    /// Record id (1-based, assigned during preparation).
    pub id: u64,
    /// The rendered judging prompt sent as the user message.
    pub content: String,
}

/// Persisted entry for a completed judge call.
///
/// `inference_result` carries the full OpenAI-shaped completion so downstream
/// tooling reads scores from the standard `choices[0].message.content` path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub original_content: String,
    pub inference_result: CreateChatCompletionResponse,
    pub timestamp: String,
}

/// Persisted entry for a failed judge call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub original_content: String,
    pub error: String,
    pub timestamp: String,
}

/// Final accounting for a dispatch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Jobs taken from the queue.
    pub total: usize,
    /// Jobs that produced a judge response.
    pub completed: usize,
    /// Jobs that failed (provider error or timeout) and were persisted as
    /// error entries.
    pub failed: usize,
    /// Wall-clock duration of the drain.
    pub elapsed: Duration,
}

/// Progress snapshot handed to the caller after every persisted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchProgress {
    /// Entries persisted so far (successes and failures).
    pub done: usize,
    /// Failures among them.
    pub failed: usize,
    /// Total jobs in this run.
    pub total: usize,
}
