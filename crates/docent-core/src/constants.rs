/// Docent system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of distinct component tags retained per query log entry.
pub const MAX_COMPONENT_TAGS: usize = 5;

/// Default trailing window for performance summaries (days).
pub const DEFAULT_SUMMARY_WINDOW_DAYS: i64 = 7;

/// Default trailing window for trend ranking (days).
pub const DEFAULT_TRENDING_WINDOW_DAYS: i64 = 7;

/// Default number of trending queries returned.
pub const DEFAULT_TRENDING_LIMIT: usize = 10;

/// Number of top components included in a performance summary.
pub const TOP_COMPONENT_LIMIT: usize = 10;

/// Query type assigned when no classifier supplies a richer label.
pub const DEFAULT_QUERY_TYPE: &str = "general";

/// Query type assigned to logs of failed retrieval calls.
pub const ERROR_QUERY_TYPE: &str = "error";
