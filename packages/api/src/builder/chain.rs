//! Fallback chain configuration

use fieldpath_client::FallbackPolicy;
use serde_json::Value as JsonValue;

use crate::builder::core::ExtractBuilder;

impl ExtractBuilder<'_> {
    /// Add the first path to try
    ///
    /// Equivalent to [`or_path`](Self::or_path); both append to the chain.
    ///
    /// # Examples
    /// ```
    /// use fieldpath::Fieldpath;
    /// use serde_json::json;
    ///
    /// let doc = json!({"data": [{"id": 7}]});
    /// assert_eq!(Fieldpath::on(&doc).path("data[0].id").as_string(), "7");
    /// ```
    #[must_use]
    pub fn path(self, path: impl Into<String>) -> Self {
        self.or_path(path)
    }

    /// Append a fallback path, tried when earlier paths are not accepted
    #[must_use]
    pub fn or_path(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Set which outcomes end the chain
    #[must_use]
    pub fn policy(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Skip empty strings, arrays and objects as well as nulls
    #[must_use]
    pub fn non_empty(self) -> Self {
        self.policy(FallbackPolicy::FirstNonEmpty)
    }

    /// Value returned by owned terminals when no path is accepted
    #[must_use]
    pub fn or_default(mut self, value: impl Into<JsonValue>) -> Self {
        self.default = Some(value.into());
        self
    }
}
