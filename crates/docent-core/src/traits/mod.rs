//! Traits at the external seams: the wrapped retriever, the query-type
//! classifier, and the component-tag extractor.

pub mod classifier;
pub mod retriever;
pub mod tagger;

pub use classifier::{GeneralClassifier, QueryClassifier};
pub use retriever::Retriever;
pub use tagger::{LexicalTagExtractor, TagExtractor};
