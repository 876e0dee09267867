//! Judge scorecards: the five-metric rubric and tolerant reply parsing.

pub mod error;


pub use error::ScoreParseError;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Upper bound for a single metric score.
pub const MAX_SCORE: u8 = 10;

/// The five rubric metrics a judge scores each answer on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Accuracy,
    Conciseness,
    Relevance,
    Completeness,
    Hallucination,
}

impl Metric {
    /// All metrics, in rubric order.
    pub const ALL: [Metric; 5] = [
        Metric::Accuracy,
        Metric::Conciseness,
        Metric::Relevance,
        Metric::Completeness,
        Metric::Hallucination,
    ];

    /// The JSON key the judge is instructed to use.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Accuracy => "accuracy",
            Metric::Conciseness => "conciseness",
            Metric::Relevance => "relevance",
            Metric::Completeness => "completeness",
            Metric::Hallucination => "hallucination",
        }
    }

    /// Column name used in the aggregate summary CSV.
    pub fn summary_column(&self) -> &'static str {
        match self {
            Metric::Accuracy => "accuracy_avg",
            Metric::Conciseness => "conciseness_avg",
            Metric::Relevance => "relevance_avg",
            Metric::Completeness => "completeness_avg",
            Metric::Hallucination => "hallucination_avg",
        }
    }
}

/// Scores for one judged answer, each in `0..=10`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub accuracy: u8,
    pub conciseness: u8,
    pub relevance: u8,
    pub completeness: u8,
    pub hallucination: u8,
}

impl ScoreCard {
    /// Parses a judge reply into a scorecard.
    ///
    /// The reply may wrap the JSON object in prose or a Markdown code fence;
    /// the first `{` .. last `}` span is what gets parsed. Missing metric keys
    /// default to 0, out-of-range values are clamped into `0..=10`.
    pub fn parse(reply: &str) -> Result<Self, ScoreParseError> {
        let value = reply_json(reply)?;
        let obj = value.as_object().ok_or(ScoreParseError::NotAnObject)?;

        let mut card = ScoreCard::default();
        for metric in Metric::ALL {
            *card.slot_mut(metric) = obj.get(metric.key()).and_then(score_value).unwrap_or(0);
        }
        Ok(card)
    }

    /// Returns the score for `metric`.
    pub fn get(&self, metric: Metric) -> u8 {
        match metric {
            Metric::Accuracy => self.accuracy,
            Metric::Conciseness => self.conciseness,
            Metric::Relevance => self.relevance,
            Metric::Completeness => self.completeness,
            Metric::Hallucination => self.hallucination,
        }
    }

    /// Mean over all five metrics.
    pub fn mean(&self) -> f64 {
        let sum: u32 = Metric::ALL.iter().map(|m| self.get(*m) as u32).sum();
        sum as f64 / Metric::ALL.len() as f64
    }

    fn slot_mut(&mut self, metric: Metric) -> &mut u8 {
        match metric {
            Metric::Accuracy => &mut self.accuracy,
            Metric::Conciseness => &mut self.conciseness,
            Metric::Relevance => &mut self.relevance,
            Metric::Completeness => &mut self.completeness,
            Metric::Hallucination => &mut self.hallucination,
        }
    }
}

fn reply_json(reply: &str) -> Result<Value, ScoreParseError> {
    let trimmed = reply.trim();

    // A well-behaved judge returns the bare object; anything else gets the
    // first-{ .. last-} span (prose preamble, Markdown fences).
    if let Ok(value) = serde_json::from_str(trimmed) {
        return Ok(value);
    }

    let body = extract_json_object(trimmed).ok_or(ScoreParseError::NoJsonObject)?;
    serde_json::from_str(body).map_err(ScoreParseError::InvalidJson)
}

fn score_value(value: &Value) -> Option<u8> {
    value
        .as_f64()
        .map(|f| f.clamp(0.0, MAX_SCORE as f64).round() as u8)
}

fn extract_json_object(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    (end >= start).then(|| &reply[start..=end])
}
