//! Terminal resolution methods

use fieldpath_client::fields::resolve_chain;
use fieldpath_client::render::value_to_display_string;
use fieldpath_client::{ExtractError, Extracted};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::builder::core::ExtractBuilder;

impl<'a> ExtractBuilder<'a> {
    /// Resolve the chain, borrowing from the document
    ///
    /// Ignores the default; returns [`Extracted::Absent`] when no path is
    /// accepted.
    #[must_use]
    pub fn get(&self) -> Extracted<'a> {
        let extracted = resolve_chain(self.document, &self.paths, self.policy, self.extractor);

        if self.debug_enabled {
            tracing::debug!(
                paths = ?self.paths,
                policy = ?self.policy,
                absent = extracted.is_absent(),
                "Fieldpath: resolved chain"
            );
        }

        extracted
    }

    /// Resolve the chain, falling back to the default
    ///
    /// `None` only when no path is accepted and no default was set.
    #[must_use]
    pub fn get_or_default(&self) -> Option<JsonValue> {
        let resolved = self.get().to_owned_value();
        if resolved.is_none() && self.debug_enabled {
            tracing::debug!(
                has_default = self.default.is_some(),
                "Fieldpath: no path accepted, using default"
            );
        }
        resolved.or_else(|| self.default.clone())
    }

    /// Resolve the chain and render the result as a parameter string
    ///
    /// Nothing resolved and no default renders as `""`.
    #[must_use]
    pub fn as_string(&self) -> String {
        self.get_or_default()
            .as_ref()
            .map(value_to_display_string)
            .unwrap_or_default()
    }

    /// Resolve the chain and deserialize the result into `T`
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Deserialize`] if the resolved value, or the
    /// default, does not match `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Option<T>, ExtractError> {
        match self.get_or_default() {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }
}
