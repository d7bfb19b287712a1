//! Data models shared across the workspace.

pub mod query_log;
pub mod retrieval;
pub mod stats;
pub mod summary;

pub use query_log::QueryLog;
pub use retrieval::{MonitoringInfo, QueryOptions, RetrievalResult, SourceRecord};
pub use stats::{ComponentStat, DailyStat};
pub use summary::{PerformanceSummary, TrendingQuery};
