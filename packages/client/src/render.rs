//! Display-string rendering for host parameter values

use serde_json::Value as JsonValue;

use crate::null_semantics::Extracted;

/// Render an extraction outcome as a parameter string
///
/// Absent and null both render as `""`. Strings are unquoted; numbers and
/// booleans use their JSON text; arrays and objects render as compact JSON.
#[must_use]
pub fn to_display_string(extracted: &Extracted<'_>) -> String {
    extracted
        .value()
        .map(value_to_display_string)
        .unwrap_or_default()
}

/// Render a JSON value as a parameter string
#[must_use]
pub fn value_to_display_string(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::String(text) => text.clone(),
        JsonValue::Bool(flag) => flag.to_string(),
        JsonValue::Number(number) => number.to_string(),
        compound @ (JsonValue::Array(_) | JsonValue::Object(_)) => compound.to_string(),
    }
}
