//! Single output field definition

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use super::chain::resolve_chain;
use super::policy::FallbackPolicy;
use crate::extractor::PathExtractor;

/// One named output resolved from a fallback chain of paths
///
/// ```
/// use fieldpath_client::fields::{FallbackPolicy, FieldSpec};
/// use serde_json::json;
///
/// let name = FieldSpec::new("entity_name", "attributes.name")
///     .or_path("attributes.code")
///     .with_policy(FallbackPolicy::FirstNonEmpty)
///     .with_default(json!("Unnamed"));
///
/// let doc = json!({"attributes": {"name": "", "code": "HERO_01"}});
/// assert_eq!(name.resolve(&doc), Some(json!("HERO_01")));
/// assert_eq!(name.resolve(&json!({})), Some(json!("Unnamed")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Output name
    pub output: String,
    /// Paths tried in order
    #[serde(default)]
    pub paths: Vec<String>,
    /// Value used when no path is accepted
    ///
    /// A `"default": null` key is a null default, not a missing one.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<JsonValue>,
    #[serde(default)]
    pub fallback: FallbackPolicy,
}

impl FieldSpec {
    pub fn new(output: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            paths: vec![path.into()],
            default: None,
            fallback: FallbackPolicy::default(),
        }
    }

    /// Output with no paths, always resolving to `value`
    pub fn constant(output: impl Into<String>, value: JsonValue) -> Self {
        Self {
            output: output.into(),
            paths: Vec::new(),
            default: Some(value),
            fallback: FallbackPolicy::default(),
        }
    }

    #[must_use]
    pub fn or_path(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }

    #[must_use]
    pub fn with_default(mut self, value: JsonValue) -> Self {
        self.default = Some(value);
        self
    }

    #[must_use]
    pub fn with_policy(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    /// Resolve against `value`, falling back to the default
    ///
    /// `None` only when no path is accepted and there is no default.
    #[must_use]
    pub fn resolve(&self, value: &JsonValue) -> Option<JsonValue> {
        self.resolve_with(value, None)
    }

    /// Resolve with a configured extractor
    #[must_use]
    pub fn resolve_with(&self, value: &JsonValue, extractor: Option<&PathExtractor>) -> Option<JsonValue> {
        resolve_chain(value, &self.paths, self.fallback, extractor)
            .to_owned_value()
            .or_else(|| self.default.clone())
    }
}

/// Wrap any present value, `null` included, in `Some`
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<JsonValue>, D::Error>
where
    D: Deserializer<'de>,
{
    JsonValue::deserialize(deserializer).map(Some)
}
