//! # docent-analytics
//!
//! The analytics engine: a durable append-only query log with two
//! incrementally maintained rollups (per-tag, per-day), a monitoring
//! wrapper around the external retriever, sliding-window trend ranking,
//! and static HTML reports.
//!
//! ## Module Overview
//!
//! - [`pool`] - Single write connection + read pool, pragma setup
//! - [`migrations`] - Idempotent schema creation gated on `user_version`
//! - [`queries`] - Per-concern SQL modules operating on `&Connection`
//! - [`store`] - [`AnalyticsStore`]: the only writer of durable state
//! - [`monitor`] - [`QueryMonitor`]: instruments one retrieval call
//! - [`trends`] - [`TrendAnalyzer`]: read-only sliding-window ranking
//! - [`report`] - [`ReportGenerator`]: renders a point-in-time snapshot

pub mod migrations;
pub mod monitor;
pub mod pool;
pub mod queries;
pub mod report;
pub mod store;
pub mod trends;

pub use monitor::QueryMonitor;
pub use report::ReportGenerator;
pub use store::AnalyticsStore;
pub use trends::TrendAnalyzer;

use docent_core::errors::{DocentError, StorageError};

/// Wrap a low-level SQLite failure message into the umbrella error.
pub(crate) fn to_storage_err(message: String) -> DocentError {
    DocentError::Storage(StorageError::Sqlite { message })
}
