//! Windowed summary reads, computed directly over the raw logs so they stay
//! independent of the rollup tables.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use docent_core::constants::TOP_COMPONENT_LIMIT;
use docent_core::errors::DocentResult;
use docent_core::models::ComponentStat;

use crate::queries::parse_timestamp;
use crate::to_storage_err;

/// Count and arithmetic means over logs at or after `cutoff`.
/// Empty windows yield zeros, never a division error.
pub fn window_totals(conn: &Connection, cutoff: DateTime<Utc>) -> DocentResult<(u64, f64, f64)> {
    conn.query_row(
        "SELECT COUNT(*),
                COALESCE(AVG(response_time), 0.0),
                COALESCE(AVG(avg_similarity), 0.0)
         FROM query_logs WHERE timestamp >= ?1",
        params![cutoff.to_rfc3339()],
        |row| {
            Ok((
                row.get::<_, i64>(0)? as u64,
                row.get::<_, f64>(1)?,
                row.get::<_, f64>(2)?,
            ))
        },
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Top components ranked by in-window query count. Window-consistent with
/// the rest of the summary; the all-time rollup stays available separately.
pub fn top_components(conn: &Connection, cutoff: DateTime<Utc>) -> DocentResult<Vec<ComponentStat>> {
    let mut stmt = conn
        .prepare(
            "SELECT c.component, COUNT(*) AS cnt,
                    AVG(q.response_time), AVG(q.avg_similarity), MAX(q.timestamp)
             FROM query_log_components c
             JOIN query_logs q ON q.id = c.log_id
             WHERE q.timestamp >= ?1
             GROUP BY c.component
             ORDER BY cnt DESC, c.component ASC
             LIMIT ?2",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(
            params![cutoff.to_rfc3339(), TOP_COMPONENT_LIMIT as i64],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, f64>(2)?,
                    row.get::<_, f64>(3)?,
                    row.get::<_, String>(4)?,
                ))
            },
        )
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.into_iter()
        .map(|(component, count, avg_rt, avg_sim, last)| {
            Ok(ComponentStat {
                component,
                query_count: count as u64,
                avg_response_time: avg_rt,
                avg_similarity: avg_sim,
                last_queried: parse_timestamp(&last)?,
            })
        })
        .collect()
}

/// Query-type counts within the window, most frequent first.
pub fn query_type_counts(
    conn: &Connection,
    cutoff: DateTime<Utc>,
) -> DocentResult<Vec<(String, u64)>> {
    let mut stmt = conn
        .prepare(
            "SELECT query_type, COUNT(*) AS cnt
             FROM query_logs WHERE timestamp >= ?1
             GROUP BY query_type
             ORDER BY cnt DESC, query_type ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![cutoff.to_rfc3339()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as u64))
        })
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(rows)
}
