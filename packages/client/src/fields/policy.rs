//! Fallback acceptance rules

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::null_semantics::Extracted;

/// Which extraction outcomes end a fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Any present value, including `null`
    FirstPresent,
    /// Any present non-null value
    #[default]
    FirstNonNull,
    /// Any present value other than `null`, `""`, `[]` or `{}`
    ///
    /// `0` and `false` are accepted.
    FirstNonEmpty,
}

impl FallbackPolicy {
    /// Whether `extracted` ends the chain under this policy
    #[must_use]
    pub fn accepts(self, extracted: &Extracted<'_>) -> bool {
        match (self, extracted) {
            (_, Extracted::Absent) => false,
            (Self::FirstPresent, _) => true,
            (Self::FirstNonNull, Extracted::NullValue) => false,
            (Self::FirstNonNull, Extracted::Value(_)) => true,
            (Self::FirstNonEmpty, Extracted::NullValue) => false,
            (Self::FirstNonEmpty, Extracted::Value(value)) => !is_empty(value),
        }
    }
}

fn is_empty(value: &JsonValue) -> bool {
    match value {
        JsonValue::String(text) => text.is_empty(),
        JsonValue::Array(items) => items.is_empty(),
        JsonValue::Object(map) => map.is_empty(),
        JsonValue::Null => true,
        JsonValue::Bool(_) | JsonValue::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn acceptance_table() {
        let empty = json!("");
        let zero = json!(0);
        let name = json!("Hero");

        assert!(FallbackPolicy::FirstPresent.accepts(&Extracted::NullValue));
        assert!(!FallbackPolicy::FirstNonNull.accepts(&Extracted::NullValue));
        assert!(FallbackPolicy::FirstNonNull.accepts(&Extracted::Value(&empty)));
        assert!(!FallbackPolicy::FirstNonEmpty.accepts(&Extracted::Value(&empty)));
        assert!(FallbackPolicy::FirstNonEmpty.accepts(&Extracted::Value(&zero)));
        assert!(FallbackPolicy::FirstNonEmpty.accepts(&Extracted::Value(&name)));
        assert!(!FallbackPolicy::FirstPresent.accepts(&Extracted::Absent));
    }
}
