/// Errors surfaced by the wrapped external retrieval capability.
///
/// The monitor never masks these: after a best-effort error log they are
/// returned to the caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("retrieval failed: {reason}")]
    Failed { reason: String },

    #[error("retrieval backend unavailable: {reason}")]
    Unavailable { reason: String },
}
