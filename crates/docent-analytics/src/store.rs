//! AnalyticsStore — owns the ConnectionPool; the only writer of durable
//! state and sole owner of rollup consistency.

use std::path::Path;

use chrono::{Duration, NaiveDate, Utc};

use docent_core::config::defaults::DEFAULT_READ_POOL_SIZE;
use docent_core::errors::{DocentError, DocentResult, StorageError};
use docent_core::models::{ComponentStat, DailyStat, PerformanceSummary, QueryLog, TrendingQuery};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{log_ops, rollup_ops, summary_ops, trending_ops};

/// The analytics storage engine. All operations are synchronous and
/// blocking; `log()` calls serialize on the single write connection, which
/// is what keeps concurrent rollup read-modify-writes correct.
pub struct AnalyticsStore {
    pool: ConnectionPool,
}

impl AnalyticsStore {
    /// Open a store backed by a file on disk. Initialization is idempotent:
    /// re-opening an existing database never resets or duplicates data.
    pub fn open(path: &Path) -> DocentResult<Self> {
        let store = Self::open_with_pool_size(path, DEFAULT_READ_POOL_SIZE)?;
        tracing::info!(path = %path.display(), "analytics store opened");
        Ok(store)
    }

    /// Open a store with a custom read pool size.
    pub fn open_with_pool_size(path: &Path, read_pool_size: usize) -> DocentResult<Self> {
        let pool = ConnectionPool::open_file(path, read_pool_size).map_err(init_err)?;
        let store = Self { pool };
        store.initialize().map_err(init_err)?;
        Ok(store)
    }

    /// Open a store from configuration.
    pub fn from_config(config: &docent_core::AnalyticsConfig) -> DocentResult<Self> {
        Self::open_with_pool_size(&config.db_path, config.read_pool_size)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> DocentResult<Self> {
        let pool = ConnectionPool::open_in_memory().map_err(init_err)?;
        let store = Self { pool };
        store.initialize().map_err(init_err)?;
        Ok(store)
    }

    /// Run migrations on the writer.
    fn initialize(&self) -> DocentResult<()> {
        self.pool.with_writer(migrations::run_migrations)
    }

    /// Append a log entry and fold it into the per-tag and per-day rollups.
    /// Atomic: either the raw log and both rollups apply, or none do.
    /// Returns the entry's id, which feedback can later target.
    pub fn log(&self, entry: &QueryLog) -> DocentResult<String> {
        self.pool
            .with_writer(|conn| log_ops::insert_log(conn, entry))
    }

    /// Attach user feedback to a stored entry by id.
    pub fn add_feedback(&self, id: &str, feedback: &str) -> DocentResult<()> {
        self.pool
            .with_writer(|conn| log_ops::add_feedback(conn, id, feedback))
    }

    /// Fetch a stored entry by id.
    pub fn get_log(&self, id: &str) -> DocentResult<Option<QueryLog>> {
        self.pool.with_reader(|conn| log_ops::get_log(conn, id))
    }

    /// Total number of stored entries.
    pub fn count_logs(&self) -> DocentResult<u64> {
        self.pool.with_reader(log_ops::count_logs)
    }

    /// Performance summary over the trailing `days`-day window, computed
    /// directly over the windowed raw logs. Empty windows return zeros.
    pub fn get_summary(&self, days: i64) -> DocentResult<PerformanceSummary> {
        let cutoff = Utc::now() - Duration::days(days);
        self.pool.with_reader(|conn| {
            let (total_queries, avg_response_time, avg_similarity) =
                summary_ops::window_totals(conn, cutoff)?;
            if total_queries == 0 {
                return Ok(PerformanceSummary::empty(days));
            }
            Ok(PerformanceSummary {
                period_days: days,
                total_queries,
                avg_response_time,
                avg_similarity,
                top_components: summary_ops::top_components(conn, cutoff)?,
                query_types: summary_ops::query_type_counts(conn, cutoff)?,
            })
        })
    }

    /// All-time rollup for one component tag.
    pub fn component_stat(&self, component: &str) -> DocentResult<Option<ComponentStat>> {
        self.pool.with_reader(|conn| rollup_ops::get_component_stat(conn, component))
    }

    /// Rollup for one calendar date.
    pub fn daily_stat(&self, date: NaiveDate) -> DocentResult<Option<DailyStat>> {
        self.pool.with_reader(|conn| rollup_ops::get_daily_stat(conn, date))
    }

    /// Trending queries within the trailing `window_days` window.
    pub fn trending(&self, window_days: i64, limit: usize) -> DocentResult<Vec<TrendingQuery>> {
        let cutoff = Utc::now() - Duration::days(window_days);
        self.pool.with_reader(|conn| trending_ops::trending_queries(conn, cutoff, limit))
    }
}

/// Failures during open/initialize are fatal init errors, not write errors.
fn init_err(e: DocentError) -> DocentError {
    DocentError::Storage(StorageError::Init {
        reason: e.to_string(),
    })
}
