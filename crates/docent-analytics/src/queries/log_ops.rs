//! Raw query-log writes: the one transaction that keeps log + rollups
//! consistent, plus feedback attachment and single-entry reads.

use rusqlite::{params, Connection, OptionalExtension};

use docent_core::errors::{DocentError, DocentResult, StorageError};
use docent_core::models::QueryLog;

use crate::queries::{parse_timestamp, rollup_ops};
use crate::to_storage_err;

/// Append `entry` and apply both rollups in a single transaction.
/// All-or-nothing: a failure leaves no partially applied state visible.
/// Returns the entry's id.
pub fn insert_log(conn: &Connection, entry: &QueryLog) -> DocentResult<String> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("insert_log begin: {e}")))?;

    match insert_log_inner(&tx, entry) {
        Ok(()) => {
            tx.commit()
                .map_err(|e| to_storage_err(format!("insert_log commit: {e}")))?;
            Ok(entry.id.clone())
        }
        Err(e) => {
            let _ = tx.rollback();
            Err(DocentError::Storage(StorageError::Write {
                reason: e.to_string(),
            }))
        }
    }
}

/// Inner insert logic, operating on the provided connection (or transaction
/// via Deref).
fn insert_log_inner(conn: &Connection, entry: &QueryLog) -> DocentResult<()> {
    let components_json = serde_json::to_string(&entry.components)?;
    let scores_json = serde_json::to_string(&entry.similarity_scores)?;
    let avg_similarity = entry.mean_similarity();

    conn.execute(
        "INSERT INTO query_logs (
            id, timestamp, query, query_type, components, response_time,
            num_results, similarity_scores, avg_similarity, user_feedback,
            session_id
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            entry.id,
            entry.timestamp.to_rfc3339(),
            entry.query,
            entry.query_type,
            components_json,
            entry.response_time_secs,
            entry.num_results as i64,
            scores_json,
            avg_similarity,
            entry.user_feedback,
            entry.session_id,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    // Junction rows and rollup upserts use the distinct tag set; the entry
    // may legitimately carry a tag once only, but dedupe defensively.
    let mut distinct: Vec<&str> = Vec::with_capacity(entry.components.len());
    for tag in &entry.components {
        if !distinct.contains(&tag.as_str()) {
            distinct.push(tag);
        }
    }

    for tag in &distinct {
        conn.execute(
            "INSERT OR IGNORE INTO query_log_components (log_id, component) VALUES (?1, ?2)",
            params![entry.id, tag],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

        rollup_ops::upsert_component_stat(
            conn,
            tag,
            entry.response_time_secs,
            avg_similarity,
            entry.timestamp,
        )?;
    }

    rollup_ops::upsert_daily_stat(
        conn,
        entry.date(),
        &distinct,
        entry.response_time_secs,
        avg_similarity,
    )?;

    tracing::debug!(
        event = "query_logged",
        log_id = %entry.id,
        query = %entry.query,
        query_type = %entry.query_type,
        components = distinct.len(),
        response_time_secs = entry.response_time_secs,
        num_results = entry.num_results,
        "query logged"
    );

    Ok(())
}

/// Attach user feedback to an existing log entry by id.
pub fn add_feedback(conn: &Connection, id: &str, feedback: &str) -> DocentResult<()> {
    let rows = conn
        .execute(
            "UPDATE query_logs SET user_feedback = ?2 WHERE id = ?1",
            params![id, feedback],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    if rows == 0 {
        return Err(DocentError::Storage(StorageError::LogNotFound {
            id: id.to_string(),
        }));
    }
    Ok(())
}

/// Fetch a single log entry by id.
pub fn get_log(conn: &Connection, id: &str) -> DocentResult<Option<QueryLog>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, timestamp, query, query_type, components, response_time,
                    num_results, similarity_scores, user_feedback, session_id
             FROM query_logs WHERE id = ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let row = stmt
        .query_row(params![id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, f64>(5)?,
                row.get::<_, i64>(6)?,
                row.get::<_, String>(7)?,
                row.get::<_, Option<String>>(8)?,
                row.get::<_, Option<String>>(9)?,
            ))
        })
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let Some((id, ts, query, query_type, components_json, rt, n, scores_json, feedback, session)) =
        row
    else {
        return Ok(None);
    };

    Ok(Some(QueryLog {
        id,
        timestamp: parse_timestamp(&ts)?,
        query,
        query_type,
        components: serde_json::from_str(&components_json)?,
        response_time_secs: rt,
        num_results: n as usize,
        similarity_scores: serde_json::from_str(&scores_json)?,
        user_feedback: feedback,
        session_id: session,
    }))
}

/// Total number of stored log entries.
pub fn count_logs(conn: &Connection) -> DocentResult<u64> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM query_logs", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as u64)
}
