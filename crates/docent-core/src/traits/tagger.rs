use regex::Regex;

use crate::config::defaults::DEFAULT_TAG_PATTERN;

/// Extracts component tags from query text or source content.
///
/// Tag naming conventions are domain-specific, so extraction is a pluggable
/// capability rather than a fixed rule inside the aggregation engine.
pub trait TagExtractor: Send + Sync {
    /// All tag occurrences in `text`, in order of appearance. The caller
    /// deduplicates and caps.
    fn extract(&self, text: &str) -> Vec<String>;
}

/// Default extractor: matches a lexical pattern against the lowercased text.
#[derive(Debug, Clone)]
pub struct LexicalTagExtractor {
    pattern: Regex,
}

impl LexicalTagExtractor {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl Default for LexicalTagExtractor {
    fn default() -> Self {
        // The default pattern is a checked constant.
        Self::new(DEFAULT_TAG_PATTERN).expect("default tag pattern is valid")
    }
}

impl TagExtractor for LexicalTagExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.pattern
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
