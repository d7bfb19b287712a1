//! Sliding-window trend ranking: case-insensitive exact-text grouping,
//! ordered by frequency then mean similarity.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use docent_core::errors::DocentResult;
use docent_core::models::TrendingQuery;

use crate::to_storage_err;

/// Up to `limit` query groups logged at or after `cutoff`.
pub fn trending_queries(
    conn: &Connection,
    cutoff: DateTime<Utc>,
    limit: usize,
) -> DocentResult<Vec<TrendingQuery>> {
    let mut stmt = conn
        .prepare(
            "SELECT query, COUNT(*) AS frequency,
                    AVG(response_time), AVG(avg_similarity)
             FROM query_logs
             WHERE timestamp >= ?1
             GROUP BY LOWER(query)
             ORDER BY frequency DESC, AVG(avg_similarity) DESC
             LIMIT ?2",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![cutoff.to_rfc3339(), limit as i64], |row| {
            Ok(TrendingQuery {
                query: row.get(0)?,
                frequency: row.get::<_, i64>(1)? as u64,
                avg_response_time: row.get(2)?,
                avg_similarity: row.get(3)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(rows)
}
