/// Storage-layer errors for SQLite operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("storage initialization failed: {reason}")]
    Init { reason: String },

    #[error("analytics write failed: {reason}")]
    Write { reason: String },

    #[error("no query log with id {id}")]
    LogNotFound { id: String },
}
