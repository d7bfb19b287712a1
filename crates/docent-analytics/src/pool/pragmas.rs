//! PRAGMA configuration applied to SQLite connections.
//!
//! WAL mode, NORMAL sync, 5s busy_timeout, foreign_keys ON on the writer;
//! read connections only get the pragmas a read-only handle may set.

use rusqlite::Connection;

use docent_core::errors::DocentResult;

use crate::to_storage_err;

/// Apply write-side pragmas to the single writer connection.
pub fn apply_write_pragmas(conn: &Connection) -> DocentResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Apply pragmas a read-only connection is allowed to set.
pub fn apply_read_pragmas(conn: &Connection) -> DocentResult<()> {
    conn.execute_batch(
        "
        PRAGMA busy_timeout = 5000;
        PRAGMA cache_size = -16000;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> DocentResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
