//! Shared fixtures for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

/// A well-formed judge reply: 9/8/9/7/10 across the five metrics.
pub const SCORES: &str =
    r#"{"accuracy": 9, "conciseness": 8, "relevance": 9, "completeness": 7, "hallucination": 10}"#;

/// Mean of [`SCORES`] metric values.
pub const SCORES_MEAN: f64 = 8.6;

/// Writes a raw answers export: three records with an `answer` field plus
/// ride-along metadata, the shape the prepare stage consumes.
pub fn write_raw_answers(dir: &Path) -> PathBuf {
    let path = dir.join("raw-answers.json");
    fs::write(
        &path,
        r#"[
            {"answer": "Cao Cao unified the north after Guandu.", "question": "q1", "label": "ref1"},
            {"answer": "The battle of Chibi happened in 208.", "question": "q2", "label": "ref2"},
            {"answer": "Liu Bei founded Shu Han in 221.", "question": "q3", "label": "ref3"}
        ]"#,
    )
    .expect("write raw answers fixture");
    path
}
