//! QueryMonitor — wraps exactly one retrieval call and guarantees it is
//! measured regardless of outcome, without changing what the caller sees.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, warn};

use docent_core::constants::{ERROR_QUERY_TYPE, MAX_COMPONENT_TAGS};
use docent_core::errors::{DocentResult, RetrievalError};
use docent_core::models::{MonitoringInfo, QueryLog, QueryOptions, RetrievalResult, SourceRecord};
use docent_core::traits::{
    GeneralClassifier, LexicalTagExtractor, QueryClassifier, Retriever, TagExtractor,
};

use crate::store::AnalyticsStore;

/// Instruments an external retriever: times each call, derives tags and
/// scores from the result, and logs fire-and-forget to the store. A failed
/// analytics write never fails the retrieval; a failed retrieval is
/// re-raised unchanged after a best-effort error log.
pub struct QueryMonitor {
    store: Arc<AnalyticsStore>,
    retriever: Arc<dyn Retriever>,
    tagger: Box<dyn TagExtractor>,
    classifier: Box<dyn QueryClassifier>,
    session_id: String,
    max_tags: usize,
}

impl QueryMonitor {
    /// Create a monitor with the default lexical tagger and classifier.
    pub fn new(store: Arc<AnalyticsStore>, retriever: Arc<dyn Retriever>) -> Self {
        Self {
            store,
            retriever,
            tagger: Box::new(LexicalTagExtractor::default()),
            classifier: Box::new(GeneralClassifier),
            session_id: Utc::now().format("%Y%m%d_%H%M%S").to_string(),
            max_tags: MAX_COMPONENT_TAGS,
        }
    }

    /// Plug in a richer tag extractor.
    pub fn with_tagger(mut self, tagger: Box<dyn TagExtractor>) -> Self {
        self.tagger = tagger;
        self
    }

    /// Plug in a richer query-type classifier.
    pub fn with_classifier(mut self, classifier: Box<dyn QueryClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Override the per-entry distinct tag cap.
    pub fn with_max_tags(mut self, max_tags: usize) -> Self {
        self.max_tags = max_tags;
        self
    }

    /// Session identifier minted at construction, carried on every entry.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Execute one monitored retrieval call.
    pub fn query_with_monitoring(
        &self,
        query: &str,
        options: &QueryOptions,
    ) -> Result<RetrievalResult, RetrievalError> {
        let started = Instant::now();

        match self.retriever.answer(query, options) {
            Ok(mut result) => {
                let elapsed = started.elapsed().as_secs_f64();
                let components = self.derive_components(query, &result.sources);
                let scores: Vec<f64> =
                    result.sources.iter().filter_map(|s| s.similarity).collect();

                let entry = QueryLog::new(
                    query,
                    self.classifier.classify(query),
                    components,
                    elapsed,
                    result.sources.len(),
                    scores.clone(),
                )
                .with_session(self.session_id.clone());

                let log_id = self.log_best_effort(&entry);

                debug!(
                    query = %query,
                    response_time_secs = elapsed,
                    num_results = result.sources.len(),
                    "monitored query succeeded"
                );

                result.monitoring = Some(MonitoringInfo {
                    log_id,
                    response_time_secs: elapsed,
                    similarity_scores: scores,
                    session_id: Some(self.session_id.clone()),
                });
                Ok(result)
            }
            Err(err) => {
                let elapsed = started.elapsed().as_secs_f64();
                let entry = QueryLog::new(query, ERROR_QUERY_TYPE, Vec::new(), elapsed, 0, Vec::new())
                    .with_session(self.session_id.clone());
                self.log_best_effort(&entry);

                debug!(query = %query, error = %err, "monitored query failed");
                Err(err)
            }
        }
    }

    /// Attach feedback to a previously returned log id.
    pub fn add_feedback(&self, log_id: &str, feedback: &str) -> DocentResult<()> {
        self.store.add_feedback(log_id, feedback)
    }

    /// Write the entry, swallowing storage failures. Returns the log id on
    /// success so the caller can surface it in the monitoring metadata.
    fn log_best_effort(&self, entry: &QueryLog) -> Option<String> {
        match self.store.log(entry) {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(
                    query = %entry.query,
                    error = %e,
                    "analytics write failed; retrieval outcome unaffected"
                );
                None
            }
        }
    }

    /// Scan the query text and the returned sources' content for component
    /// tags; deduplicate preserving first occurrence and cap the count.
    fn derive_components(&self, query: &str, sources: &[SourceRecord]) -> Vec<String> {
        let mut components: Vec<String> = Vec::new();

        let push_all = |tags: Vec<String>, components: &mut Vec<String>| {
            for tag in tags {
                if components.len() >= self.max_tags {
                    return;
                }
                if !components.contains(&tag) {
                    components.push(tag);
                }
            }
        };

        push_all(self.tagger.extract(query), &mut components);
        for source in sources {
            if components.len() >= self.max_tags {
                break;
            }
            if let Some(content) = &source.content {
                push_all(self.tagger.extract(content), &mut components);
            }
        }
        components
    }
}
