//! Boundary types for the external retrieval capability.
//!
//! This core only reads these shapes; the retrieval engine that produces
//! them lives outside the workspace.

use serde::{Deserialize, Serialize};

/// Options forwarded untouched to the wrapped retriever.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    pub max_results: Option<usize>,
    pub session_hint: Option<String>,
}

/// One source record returned by the retriever. Optional fields are
/// modeled explicitly so absence is handled deterministically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceRecord {
    pub content: Option<String>,
    pub similarity: Option<f64>,
}

/// Result of one retrieval call; `monitoring` is attached by the monitor
/// after a successful instrumented call and is absent otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub answer: String,
    pub sources: Vec<SourceRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<MonitoringInfo>,
}

impl RetrievalResult {
    pub fn new(answer: impl Into<String>, sources: Vec<SourceRecord>) -> Self {
        Self {
            answer: answer.into(),
            sources,
            monitoring: None,
        }
    }
}

/// Monitoring metadata attached to a successful instrumented result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringInfo {
    /// Id of the durable log entry, when the analytics write succeeded.
    pub log_id: Option<String>,
    pub response_time_secs: f64,
    pub similarity_scores: Vec<f64>,
    pub session_id: Option<String>,
}
