//! TrendAnalyzer — read-only ranking of recent queries by frequency and
//! quality over a sliding window.

use docent_core::constants::DEFAULT_TRENDING_WINDOW_DAYS;
use docent_core::errors::DocentResult;
use docent_core::models::TrendingQuery;

use crate::store::AnalyticsStore;

/// Ranks logged queries within a fixed trailing window (default 7 days).
/// Groups are case-insensitive exact text matches, ordered by frequency
/// descending with ties broken by mean similarity descending.
pub struct TrendAnalyzer<'a> {
    store: &'a AnalyticsStore,
    window_days: i64,
}

impl<'a> TrendAnalyzer<'a> {
    pub fn new(store: &'a AnalyticsStore) -> Self {
        Self {
            store,
            window_days: DEFAULT_TRENDING_WINDOW_DAYS,
        }
    }

    /// Override the trailing window.
    pub fn with_window_days(mut self, window_days: i64) -> Self {
        self.window_days = window_days;
        self
    }

    /// Up to `limit` trending query groups.
    pub fn get_trending(&self, limit: usize) -> DocentResult<Vec<TrendingQuery>> {
        self.store.trending(self.window_days, limit)
    }
}
