/// Report generation errors. Fatal for the report call that raised them only.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to render report: {reason}")]
    Render { reason: String },

    #[error("failed to write report to {path}: {reason}")]
    Write { path: String, reason: String },
}
