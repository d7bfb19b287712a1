//! Default values backing [`super::AnalyticsConfig`].

pub const DEFAULT_DB_PATH: &str = "docent_analytics.db";

/// Lexical pattern for the documentation component naming convention
/// (`v-btn`, `v-data-table`, ...). Overridable per deployment.
pub const DEFAULT_TAG_PATTERN: &str = "v-[a-z][a-z-]*";

pub const DEFAULT_READ_POOL_SIZE: usize = 4;
