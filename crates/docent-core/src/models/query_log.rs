//! Immutable record of one instrumented retrieval call: outcome and timing.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single query log entry. Created exactly once per completed
/// (successful or failed) instrumented call; never mutated afterwards
/// apart from the optional feedback attachment, which targets the `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryLog {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub query: String,
    /// Free-form category supplied by a classifier ("general" by default).
    pub query_type: String,
    /// Deduplicated component tags, bounded by `MAX_COMPONENT_TAGS`.
    pub components: Vec<String>,
    pub response_time_secs: f64,
    pub num_results: usize,
    /// One score per result that carried one; may be empty.
    pub similarity_scores: Vec<f64>,
    pub user_feedback: Option<String>,
    pub session_id: Option<String>,
}

impl QueryLog {
    /// Create a new entry with a fresh id and the timestamp set to now.
    pub fn new(
        query: impl Into<String>,
        query_type: impl Into<String>,
        components: Vec<String>,
        response_time_secs: f64,
        num_results: usize,
        similarity_scores: Vec<f64>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            query: query.into(),
            query_type: query_type.into(),
            components,
            response_time_secs,
            num_results,
            similarity_scores,
            user_feedback: None,
            session_id: None,
        }
    }

    /// Override the timestamp (backfill and tests).
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Mean of the entry's similarity scores. An empty score list
    /// contributes 0.0, matching the rollup semantics.
    pub fn mean_similarity(&self) -> f64 {
        if self.similarity_scores.is_empty() {
            return 0.0;
        }
        self.similarity_scores.iter().sum::<f64>() / self.similarity_scores.len() as f64
    }

    /// Calendar date (UTC) this entry falls on; the daily rollup key.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}
