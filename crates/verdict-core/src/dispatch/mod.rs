//! Concurrent judge dispatch.
//!
//! A bounded worker pool drains a shared job queue; every outcome (response
//! or failure) is appended to the [`ResultSink`] before the next job starts,
//! so progress is durable across interruptions. Workers stop when the queue
//! is empty.

pub mod adapter;
pub mod error;
pub mod judge;
pub mod sink;
pub mod types;


pub use adapter::{adapt_chat_response, completion_from_text};
pub use error::DispatchError;
#[cfg(any(test, feature = "mock"))]
pub use judge::MockJudge;
pub use judge::{ChatJudge, GenaiJudge};
pub use sink::ResultSink;
pub use types::{DispatchProgress, DispatchSummary, ErrorRecord, ScoreJob, ScoreRecord};

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use chrono::Utc;
use serde_json::Value;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::dataset::Record;

/// Hard cap on worker count regardless of configuration.
pub const MAX_CONCURRENCY: usize = 1000;

/// Builds jobs from prepared records.
///
/// Records without a string `content` field are warned about and skipped,
/// mirroring the preparation stage's tolerance.
pub fn jobs_from_records(records: &[Record]) -> Vec<ScoreJob> {
    let mut jobs = Vec::with_capacity(records.len());

    for (idx, record) in records.iter().enumerate() {
        match record.content.as_ref().and_then(Value::as_str) {
            Some(text) => jobs.push(ScoreJob {
                id: record.id.unwrap_or(idx as u64 + 1),
                content: text.to_string(),
            }),
            None => warn!(index = idx + 1, "record has no string content, skipped"),
        }
    }

    jobs
}

/// Drains score jobs through a judge with bounded concurrency.
#[derive(Debug)]
pub struct Dispatcher<J: ChatJudge> {
    judge: Arc<J>,
    system_prompt: String,
    concurrency: usize,
    request_timeout: Duration,
}

impl<J: ChatJudge + 'static> Dispatcher<J> {
    /// Creates a dispatcher with explicit settings.
    pub fn new(
        judge: J,
        system_prompt: impl Into<String>,
        concurrency: usize,
        request_timeout: Duration,
    ) -> Self {
        Self {
            judge: Arc::new(judge),
            system_prompt: system_prompt.into(),
            concurrency: concurrency.clamp(1, MAX_CONCURRENCY),
            request_timeout,
        }
    }

    /// Creates a dispatcher taking prompt/concurrency/timeout from `config`.
    pub fn from_config(judge: J, config: &Config) -> Self {
        Self::new(
            judge,
            config.system_prompt.clone(),
            config.concurrency,
            config.timeout,
        )
    }

    /// Runs every job to completion and returns the final accounting.
    ///
    /// `progress` fires after each persisted entry. Judge failures never abort
    /// the drain; they are persisted as [`ErrorRecord`]s and counted.
    pub async fn run<F>(
        &self,
        jobs: Vec<ScoreJob>,
        sink: Arc<ResultSink>,
        progress: F,
    ) -> Result<DispatchSummary, DispatchError>
    where
        F: Fn(DispatchProgress) + Send + Sync + 'static,
    {
        let total = jobs.len();
        if total == 0 {
            return Ok(DispatchSummary::default());
        }

        let start = Instant::now();
        let workers = self.concurrency.min(total);

        info!(total, workers, "dispatching score jobs");

        let queue = Arc::new(Mutex::new(VecDeque::from(jobs)));
        let done = Arc::new(AtomicUsize::new(0));
        let failed = Arc::new(AtomicUsize::new(0));
        let progress = Arc::new(progress);

        let mut handles = Vec::with_capacity(workers);
        for worker_id in 0..workers {
            let queue = Arc::clone(&queue);
            let sink = Arc::clone(&sink);
            let done = Arc::clone(&done);
            let failed = Arc::clone(&failed);
            let progress = Arc::clone(&progress);
            let judge = Arc::clone(&self.judge);
            let system_prompt = self.system_prompt.clone();
            let request_timeout = self.request_timeout;

            handles.push(tokio::spawn(async move {
                debug!(worker_id, "worker starting");

                loop {
                    let job = { queue.lock().await.pop_front() };
                    let Some(job) = job else { break };

                    let outcome =
                        timeout(request_timeout, judge.complete(&system_prompt, &job.content))
                            .await;
                    let timestamp = Utc::now().to_rfc3339();

                    let append_result = match outcome {
                        Ok(Ok(response)) => {
                            debug!(worker_id, job_id = job.id, "judge call completed");
                            sink.append(&ScoreRecord {
                                original_content: job.content,
                                inference_result: response,
                                timestamp,
                            })
                            .await
                        }
                        Ok(Err(e)) => {
                            warn!(worker_id, job_id = job.id, error = %e, "judge call failed");
                            failed.fetch_add(1, Ordering::Relaxed);
                            sink.append(&ErrorRecord {
                                original_content: job.content,
                                error: e.to_string(),
                                timestamp,
                            })
                            .await
                        }
                        Err(_) => {
                            warn!(
                                worker_id,
                                job_id = job.id,
                                timeout_secs = request_timeout.as_secs(),
                                "judge call timed out"
                            );
                            failed.fetch_add(1, Ordering::Relaxed);
                            sink.append(&ErrorRecord {
                                original_content: job.content,
                                error: format!(
                                    "timed out after {}s",
                                    request_timeout.as_secs()
                                ),
                                timestamp,
                            })
                            .await
                        }
                    };

                    if let Err(e) = append_result {
                        warn!(worker_id, error = %e, "failed to persist result entry");
                    }

                    let done_now = done.fetch_add(1, Ordering::Relaxed) + 1;
                    progress(DispatchProgress {
                        done: done_now,
                        failed: failed.load(Ordering::Relaxed),
                        total,
                    });
                }

                debug!(worker_id, "queue drained, worker stopping");
            }));
        }

        for handle in handles {
            if let Err(e) = handle.await {
                warn!(error = %e, "worker task panicked");
            }
        }

        let failed = failed.load(Ordering::Relaxed);
        let summary = DispatchSummary {
            total,
            completed: total - failed,
            failed,
            elapsed: start.elapsed(),
        };

        info!(
            total = summary.total,
            completed = summary.completed,
            failed = summary.failed,
            elapsed_secs = summary.elapsed.as_secs_f64(),
            "dispatch complete"
        );

        Ok(summary)
    }
}
