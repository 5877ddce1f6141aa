//! Core `ExtractBuilder` structure and base functionality

use fieldpath_client::{FallbackPolicy, PathExtractor};
use serde_json::Value as JsonValue;

/// Builder for resolving a field from a borrowed JSON document
///
/// The document and an optional shared [`PathExtractor`] are borrowed for
/// `'a`; extracted values borrow from the document.
#[derive(Debug, Clone)]
pub struct ExtractBuilder<'a> {
    /// Document being queried
    pub(crate) document: &'a JsonValue,
    /// Paths tried in order
    pub(crate) paths: Vec<String>,
    /// Which outcomes end the chain
    pub(crate) policy: FallbackPolicy,
    /// Value used when no path is accepted
    pub(crate) default: Option<JsonValue>,
    /// Shared extractor whose limits and statistics apply
    pub(crate) extractor: Option<&'a PathExtractor>,
    /// Debug logging enabled flag
    pub(crate) debug_enabled: bool,
}

impl<'a> ExtractBuilder<'a> {
    /// Start building an extraction over `document`
    #[must_use]
    pub fn new(document: &'a JsonValue) -> Self {
        Self {
            document,
            paths: Vec::new(),
            policy: FallbackPolicy::default(),
            default: None,
            extractor: None,
            debug_enabled: false,
        }
    }

    /// Resolve through a shared extractor
    ///
    /// Its configured limits apply to every path and its statistics record
    /// every attempt.
    #[must_use]
    pub fn extractor(mut self, extractor: &'a PathExtractor) -> Self {
        self.extractor = Some(extractor);
        self
    }

    /// Enable debug logging of each resolution attempt
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_enabled = true;
        self
    }

    /// Paths configured so far, in the order they are tried
    #[must_use]
    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}
