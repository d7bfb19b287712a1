//! v001: query_logs, query_log_components, component_stats, daily_stats,
//! daily_components.

use rusqlite::Connection;

use docent_core::errors::DocentResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> DocentResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS query_logs (
            id              TEXT PRIMARY KEY,
            timestamp       TEXT NOT NULL,
            query           TEXT NOT NULL,
            query_type      TEXT NOT NULL,
            components      TEXT NOT NULL,  -- JSON array, entry order preserved
            response_time   REAL NOT NULL,
            num_results     INTEGER NOT NULL,
            similarity_scores TEXT NOT NULL, -- JSON array, raw per-result scores
            avg_similarity  REAL NOT NULL,
            user_feedback   TEXT,
            session_id      TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_query_logs_timestamp ON query_logs(timestamp);

        CREATE TABLE IF NOT EXISTS query_log_components (
            log_id      TEXT NOT NULL,
            component   TEXT NOT NULL,
            PRIMARY KEY (log_id, component),
            FOREIGN KEY (log_id) REFERENCES query_logs(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_log_components_component
            ON query_log_components(component);

        CREATE TABLE IF NOT EXISTS component_stats (
            component           TEXT PRIMARY KEY,
            query_count         INTEGER NOT NULL DEFAULT 0,
            avg_response_time   REAL NOT NULL DEFAULT 0,
            avg_similarity      REAL NOT NULL DEFAULT 0,
            last_queried        TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS daily_stats (
            date                TEXT PRIMARY KEY,
            total_queries       INTEGER NOT NULL DEFAULT 0,
            avg_response_time   REAL NOT NULL DEFAULT 0,
            avg_similarity      REAL NOT NULL DEFAULT 0,
            unique_components   INTEGER NOT NULL DEFAULT 0
        );

        -- Per-day tag set, maintained incrementally so unique_components
        -- never needs a full-day rescan on write.
        CREATE TABLE IF NOT EXISTS daily_components (
            date        TEXT NOT NULL,
            component   TEXT NOT NULL,
            PRIMARY KEY (date, component)
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
