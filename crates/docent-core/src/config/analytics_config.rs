use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;

/// Analytics subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Path of the SQLite analytics database.
    pub db_path: PathBuf,
    /// Trailing window for performance summaries (days).
    pub summary_window_days: i64,
    /// Trailing window for trend ranking (days).
    pub trending_window_days: i64,
    /// Maximum number of trending queries returned.
    pub trending_limit: usize,
    /// Maximum distinct component tags per log entry.
    pub max_component_tags: usize,
    /// Regex used by the default lexical tag extractor.
    pub tag_pattern: String,
    /// Number of read connections for file-backed stores.
    pub read_pool_size: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(defaults::DEFAULT_DB_PATH),
            summary_window_days: constants::DEFAULT_SUMMARY_WINDOW_DAYS,
            trending_window_days: constants::DEFAULT_TRENDING_WINDOW_DAYS,
            trending_limit: constants::DEFAULT_TRENDING_LIMIT,
            max_component_tags: constants::MAX_COMPONENT_TAGS,
            tag_pattern: defaults::DEFAULT_TAG_PATTERN.to_string(),
            read_pool_size: defaults::DEFAULT_READ_POOL_SIZE,
        }
    }
}
