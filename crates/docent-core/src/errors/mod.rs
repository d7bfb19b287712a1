//! Error taxonomy: per-subsystem enums wrapped by the umbrella [`DocentError`].

pub mod report_error;
pub mod retrieval_error;
pub mod storage_error;

pub use report_error::ReportError;
pub use retrieval_error::RetrievalError;
pub use storage_error::StorageError;

/// Umbrella error for all Docent subsystems.
#[derive(Debug, thiserror::Error)]
pub enum DocentError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result alias used throughout the workspace.
pub type DocentResult<T> = Result<T, DocentError>;
