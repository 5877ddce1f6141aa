//! Fieldpath Public API
//!
//! Fluent field extraction from JSON API responses. Paths are tried in order
//! with a fallback policy and an optional default; absence is a normal
//! outcome, never an error.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::ExtractBuilder;

// Re-export important types from client package
pub use fieldpath_client::{
    ExtractError, ExtractorConfig, Extracted, FallbackPolicy, FieldMap, FieldSpec, PathError,
    PathExpression, PathExtractor,
};
pub use fieldpath_client::prelude;

/// Main entry point providing static builder methods
pub struct Fieldpath;

impl Fieldpath {
    /// Start an extraction over `document`
    ///
    /// # Examples
    /// ```
    /// use fieldpath::Fieldpath;
    /// use serde_json::json;
    ///
    /// let asset = json!({"attributes": {"name": "", "code": "HERO_01"}, "id": 1207});
    /// let name = Fieldpath::on(&asset)
    ///     .path("attributes.name")
    ///     .or_path("attributes.code")
    ///     .non_empty()
    ///     .or_default("Unnamed")
    ///     .as_string();
    /// assert_eq!(name, "HERO_01");
    /// ```
    #[must_use]
    pub fn on(document: &serde_json::Value) -> ExtractBuilder<'_> {
        ExtractBuilder::new(document)
    }

    /// Extract a single path
    ///
    /// Shorthand for [`fieldpath_client::extract`].
    #[must_use]
    pub fn extract<'a>(document: &'a serde_json::Value, path: &str) -> Extracted<'a> {
        fieldpath_client::extract(document, path)
    }
}
