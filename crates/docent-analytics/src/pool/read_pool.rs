//! Round-robin pool of read-only connections for file-backed stores.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::{Connection, OpenFlags};

use docent_core::errors::DocentResult;

use super::pragmas::apply_read_pragmas;
use crate::to_storage_err;

/// Upper bound on reader connections regardless of configuration.
const MAX_READERS: usize = 8;

/// Fixed set of read-only connections handed out round-robin.
///
/// Every slot attaches to the same database file, so any slot can serve
/// any read. The pool size is set once at open time from
/// `AnalyticsConfig::read_pool_size` and clamped to `1..=MAX_READERS`.
pub struct ReadPool {
    slots: Vec<Mutex<Connection>>,
    cursor: AtomicUsize,
}

impl ReadPool {
    /// Open `size` read-only connections against an existing database file.
    ///
    /// The writer must be opened first: read-only connections cannot create
    /// the database or its WAL.
    pub fn open(path: &Path, size: usize) -> DocentResult<Self> {
        let size = size.clamp(1, MAX_READERS);
        let slots = (0..size)
            .map(|_| open_reader(path).map(Mutex::new))
            .collect::<DocentResult<Vec<_>>>()?;
        Ok(Self {
            slots,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Run a read-only query on the next slot in round-robin order.
    pub fn with_conn<F, T>(&self, f: F) -> DocentResult<T>
    where
        F: FnOnce(&Connection) -> DocentResult<T>,
    {
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed) % self.slots.len();
        let conn = self.slots[idx]
            .lock()
            .map_err(|e| to_storage_err(format!("read connection lock poisoned: {e}")))?;
        f(&conn)
    }

    /// Number of reader connections actually opened.
    pub fn size(&self) -> usize {
        self.slots.len()
    }
}

fn open_reader(path: &Path) -> DocentResult<Connection> {
    let conn = Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| to_storage_err(format!("failed to open read connection: {e}")))?;
    apply_read_pragmas(&conn)?;
    Ok(conn)
}
