//! The single write connection. Every durable mutation goes through it,
//! which serializes rollup read-modify-write cycles across callers.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use docent_core::errors::DocentResult;

use super::pragmas::apply_write_pragmas;
use crate::to_storage_err;

/// Mutex-guarded writer. One per store.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open the writer for the given database path.
    pub fn open(path: &Path) -> DocentResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_write_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory writer (for testing).
    pub fn open_in_memory() -> DocentResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_write_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute a closure with exclusive access to the write connection.
    pub fn with_conn_sync<F, T>(&self, f: F) -> DocentResult<T>
    where
        F: FnOnce(&Connection) -> DocentResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("write connection lock poisoned: {e}")))?;
        f(&guard)
    }
}
