//! # docent-core
//!
//! Foundation crate for the Docent query-analytics subsystem.
//! Defines all models, traits, errors, config, and constants.
//! The analytics engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AnalyticsConfig;
pub use errors::{DocentError, DocentResult};
pub use models::{
    ComponentStat, DailyStat, MonitoringInfo, PerformanceSummary, QueryLog, QueryOptions,
    RetrievalResult, SourceRecord, TrendingQuery,
};
