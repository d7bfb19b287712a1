//! Point-in-time read models: windowed summary and trend ranking.

use serde::{Deserialize, Serialize};

use super::ComponentStat;

/// Performance summary over a trailing window. Every field, including the
/// top-components ranking, is computed over the windowed raw logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub period_days: i64,
    pub total_queries: u64,
    pub avg_response_time: f64,
    pub avg_similarity: f64,
    /// Up to ten components ranked by in-window query count.
    pub top_components: Vec<ComponentStat>,
    /// Query-type counts within the window, sorted by count descending.
    pub query_types: Vec<(String, u64)>,
}

impl PerformanceSummary {
    /// An all-zero summary for an empty window.
    pub fn empty(period_days: i64) -> Self {
        Self {
            period_days,
            total_queries: 0,
            avg_response_time: 0.0,
            avg_similarity: 0.0,
            top_components: Vec::new(),
            query_types: Vec::new(),
        }
    }
}

/// One group of identical queries (case-insensitive) within the trending
/// window, ranked by frequency then mean similarity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingQuery {
    pub query: String,
    pub frequency: u64,
    pub avg_response_time: f64,
    pub avg_similarity: f64,
}
