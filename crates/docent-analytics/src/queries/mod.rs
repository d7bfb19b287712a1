//! Per-concern SQL modules. Every function takes a `&Connection` supplied
//! by the store's pool; none of them owns connection lifecycle.

pub mod log_ops;
pub mod rollup_ops;
pub mod summary_ops;
pub mod trending_ops;

use chrono::{DateTime, Utc};

use docent_core::errors::DocentResult;

use crate::to_storage_err;

/// Parse an RFC 3339 TEXT column back into a UTC timestamp.
pub(crate) fn parse_timestamp(s: &str) -> DocentResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("parse timestamp '{s}': {e}")))
}
