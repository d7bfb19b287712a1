use crate::errors::RetrievalError;
use crate::models::{QueryOptions, RetrievalResult};

/// The external retrieval capability this core instruments.
///
/// Consumed only: exactly one call per monitored query, no retry, no
/// timeout, no cancellation. Failures propagate to the monitor's caller
/// unchanged.
pub trait Retriever: Send + Sync {
    fn answer(&self, query: &str, options: &QueryOptions)
        -> Result<RetrievalResult, RetrievalError>;
}
