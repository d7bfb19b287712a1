//! Incremental rollup upserts and readers.
//!
//! Means advance by `new_avg = (old_avg * old_count + value) / (old_count + 1)`.
//! SQLite evaluates all UPDATE assignments against the pre-update row, so the
//! count bump and the mean update inside one statement see consistent state.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use docent_core::errors::DocentResult;
use docent_core::models::{ComponentStat, DailyStat};

use crate::queries::parse_timestamp;
use crate::to_storage_err;

/// Fold one log entry into a component's rollup.
pub fn upsert_component_stat(
    conn: &Connection,
    component: &str,
    response_time: f64,
    avg_similarity: f64,
    queried_at: DateTime<Utc>,
) -> DocentResult<()> {
    conn.execute(
        "INSERT INTO component_stats
            (component, query_count, avg_response_time, avg_similarity, last_queried)
         VALUES (?1, 1, ?2, ?3, ?4)
         ON CONFLICT(component) DO UPDATE SET
            avg_response_time = (avg_response_time * query_count + ?2) / (query_count + 1),
            avg_similarity    = (avg_similarity * query_count + ?3) / (query_count + 1),
            query_count       = query_count + 1,
            last_queried      = ?4",
        params![
            component,
            response_time,
            avg_similarity,
            queried_at.to_rfc3339()
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Fold one log entry into its calendar date's rollup. The distinct tag set
/// for the day is maintained in `daily_components`, so `unique_components`
/// is a cheap count rather than a scan of the day's history.
pub fn upsert_daily_stat(
    conn: &Connection,
    date: NaiveDate,
    components: &[&str],
    response_time: f64,
    avg_similarity: f64,
) -> DocentResult<()> {
    let date_key = date.to_string();

    for component in components {
        conn.execute(
            "INSERT OR IGNORE INTO daily_components (date, component) VALUES (?1, ?2)",
            params![date_key, component],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    }

    conn.execute(
        "INSERT INTO daily_stats
            (date, total_queries, avg_response_time, avg_similarity, unique_components)
         VALUES (?1, 1, ?2, ?3,
            (SELECT COUNT(*) FROM daily_components WHERE date = ?1))
         ON CONFLICT(date) DO UPDATE SET
            avg_response_time = (avg_response_time * total_queries + ?2) / (total_queries + 1),
            avg_similarity    = (avg_similarity * total_queries + ?3) / (total_queries + 1),
            total_queries     = total_queries + 1,
            unique_components = (SELECT COUNT(*) FROM daily_components WHERE date = ?1)",
        params![date_key, response_time, avg_similarity],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Read a component's all-time rollup.
pub fn get_component_stat(conn: &Connection, component: &str) -> DocentResult<Option<ComponentStat>> {
    let mut stmt = conn
        .prepare(
            "SELECT component, query_count, avg_response_time, avg_similarity, last_queried
             FROM component_stats WHERE component = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let row = stmt
        .query_row(params![component], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, f64>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, String>(4)?,
            ))
        })
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let Some((component, count, avg_rt, avg_sim, last)) = row else {
        return Ok(None);
    };

    Ok(Some(ComponentStat {
        component,
        query_count: count as u64,
        avg_response_time: avg_rt,
        avg_similarity: avg_sim,
        last_queried: parse_timestamp(&last)?,
    }))
}

/// Read a calendar date's rollup.
pub fn get_daily_stat(conn: &Connection, date: NaiveDate) -> DocentResult<Option<DailyStat>> {
    let mut stmt = conn
        .prepare(
            "SELECT total_queries, avg_response_time, avg_similarity, unique_components
             FROM daily_stats WHERE date = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let row = stmt
        .query_row(params![date.to_string()], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, f64>(1)?,
                row.get::<_, f64>(2)?,
                row.get::<_, i64>(3)?,
            ))
        })
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(row.map(|(total, avg_rt, avg_sim, unique)| DailyStat {
        date,
        total_queries: total as u64,
        avg_response_time: avg_rt,
        avg_similarity: avg_sim,
        unique_components: unique as u64,
    }))
}
