//! Derived rollup records maintained incrementally by the analytics store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Per-component-tag rollup. `query_count` is monotonic; the running means
/// are always reconstructable by replaying the raw log from empty state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentStat {
    pub component: String,
    pub query_count: u64,
    pub avg_response_time: f64,
    pub avg_similarity: f64,
    pub last_queried: DateTime<Utc>,
}

/// Per-calendar-date rollup. `unique_components` is a distinct-count over
/// the day's full history, not a sum of per-entry tag counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStat {
    pub date: NaiveDate,
    pub total_queries: u64,
    pub avg_response_time: f64,
    pub avg_similarity: f64,
    pub unique_components: u64,
}
