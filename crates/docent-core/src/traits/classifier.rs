use crate::constants::DEFAULT_QUERY_TYPE;

/// Supplies the query-type label for a log entry.
///
/// A richer implementation (intent model, external service) plugs in here;
/// the default labels everything "general".
pub trait QueryClassifier: Send + Sync {
    fn classify(&self, query: &str) -> String;
}

/// Default classifier: every query is "general".
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralClassifier;

impl QueryClassifier for GeneralClassifier {
    fn classify(&self, _query: &str) -> String {
        DEFAULT_QUERY_TYPE.to_string()
    }
}
