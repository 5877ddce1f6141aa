//! Owned and typed conversions of an extraction outcome

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use super::extracted::Extracted;
use crate::error::ExtractResult;

impl Extracted<'_> {
    /// Clone the present value out of the document
    ///
    /// A present null becomes `Some(JsonValue::Null)`; absent becomes `None`.
    #[inline]
    #[must_use]
    pub fn to_owned_value(&self) -> Option<JsonValue> {
        self.value_with_null().cloned()
    }

    /// Deserialize the present value into `T`
    ///
    /// Absent yields `Ok(None)`. A present null is handed to `T`, so
    /// `Option<_>` targets accept it and most others reject it.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::Deserialize`](crate::error::ExtractError::Deserialize)
    /// if the present value does not match `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> ExtractResult<Option<T>> {
        match self.value_with_null() {
            Some(value) => Ok(Some(T::deserialize(value)?)),
            None => Ok(None),
        }
    }
}
