//! Extraction outcome type

use serde_json::Value as JsonValue;

/// Outcome of resolving a path against a JSON value
///
/// Borrowed from the input document, so nested structures are returned by
/// reference and compare equal to the original subtree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extracted<'a> {
    /// Path resolved to a JSON `null`
    NullValue,
    /// Path resolved to a non-null value
    Value(&'a JsonValue),
    /// Path could not be resolved
    Absent,
}

impl<'a> Extracted<'a> {
    /// Classify a resolved terminal value
    #[inline]
    #[must_use]
    pub fn from_value(value: &'a JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::NullValue,
            value => Self::Value(value),
        }
    }

    /// Null or non-null value was found
    #[inline]
    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    #[inline]
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::NullValue)
    }

    /// Non-null value, if any
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&'a JsonValue> {
        match self {
            Self::Value(value) => Some(value),
            Self::NullValue | Self::Absent => None,
        }
    }

    /// Present value with null preserved
    #[inline]
    #[must_use]
    pub fn value_with_null(&self) -> Option<&'a JsonValue> {
        static NULL: JsonValue = JsonValue::Null;
        match self {
            Self::Value(value) => Some(value),
            Self::NullValue => Some(&NULL),
            Self::Absent => None,
        }
    }

    /// Present value, or `fallback` when absent
    #[inline]
    #[must_use]
    pub fn unwrap_or(self, fallback: &'a JsonValue) -> &'a JsonValue {
        self.value_with_null().unwrap_or(fallback)
    }

    /// Present value, or the result of `f` when absent
    #[inline]
    pub fn or_else(self, f: impl FnOnce() -> Extracted<'a>) -> Extracted<'a> {
        match self {
            Self::Absent => f(),
            present => present,
        }
    }
}

impl<'a> From<Option<&'a JsonValue>> for Extracted<'a> {
    fn from(value: Option<&'a JsonValue>) -> Self {
        value.map_or(Self::Absent, Self::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_is_present_but_not_a_value() {
        let null = json!(null);
        let extracted = Extracted::from_value(&null);
        assert!(extracted.is_present());
        assert!(extracted.is_null());
        assert_eq!(extracted.value(), None);
        assert_eq!(extracted.value_with_null(), Some(&JsonValue::Null));
    }

    #[test]
    fn absent_falls_back() {
        let fallback = json!("n/a");
        assert_eq!(Extracted::Absent.unwrap_or(&fallback), &fallback);
        assert_eq!(Extracted::NullValue.unwrap_or(&fallback), &JsonValue::Null);
        assert_eq!(Extracted::from(None), Extracted::Absent);
    }
}
