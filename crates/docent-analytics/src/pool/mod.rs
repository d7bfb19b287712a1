//! Connection management: one mutex-guarded writer per store, plus a
//! read-only pool for file-backed stores.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::Path;

use docent_core::errors::DocentResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

/// Connection routing for one store.
///
/// File-backed stores serve reads from a pool of read-only WAL connections
/// so summaries and trend queries never contend with `log()` writes.
/// In-memory stores have no such pool: separate in-memory connections are
/// isolated databases, so reads go through the writer.
pub enum ConnectionPool {
    File {
        writer: WriteConnection,
        readers: ReadPool,
    },
    InMemory {
        writer: WriteConnection,
    },
}

impl ConnectionPool {
    /// Open a file-backed pool. The writer is opened first so the database
    /// and its WAL exist before the read-only connections attach.
    pub fn open_file(path: &Path, read_pool_size: usize) -> DocentResult<Self> {
        let writer = WriteConnection::open(path)?;
        let readers = ReadPool::open(path, read_pool_size)?;
        Ok(Self::File { writer, readers })
    }

    /// Open an in-memory pool (for testing).
    pub fn open_in_memory() -> DocentResult<Self> {
        Ok(Self::InMemory {
            writer: WriteConnection::open_in_memory()?,
        })
    }

    /// Execute a mutation with exclusive access to the writer.
    pub fn with_writer<F, T>(&self, f: F) -> DocentResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> DocentResult<T>,
    {
        match self {
            Self::File { writer, .. } | Self::InMemory { writer } => writer.with_conn_sync(f),
        }
    }

    /// Execute a read-only query on the best available connection.
    pub fn with_reader<F, T>(&self, f: F) -> DocentResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> DocentResult<T>,
    {
        match self {
            Self::File { readers, .. } => readers.with_conn(f),
            Self::InMemory { writer } => writer.with_conn_sync(f),
        }
    }
}
