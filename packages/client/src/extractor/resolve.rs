//! Segment-by-segment resolution

use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::ExtractResult;
use crate::null_semantics::Extracted;
use crate::path::{PathExpression, PathSegment};

/// Extract the value at `path` from `value`
///
/// Returns [`Extracted::Absent`] when the path is malformed or any segment
/// cannot be resolved. Never panics, never mutates its inputs.
///
/// ```
/// use fieldpath_client::extractor::extract;
/// use serde_json::json;
///
/// let doc = json!({"data": [{"id": 7, "tag": null}]});
/// assert_eq!(extract(&doc, "data[0].id").value(), Some(&json!(7)));
/// assert!(extract(&doc, "data[0].tag").is_null());
/// assert!(extract(&doc, "data[1].id").is_absent());
/// ```
#[must_use]
pub fn extract<'a>(value: &'a JsonValue, path: &str) -> Extracted<'a> {
    match PathExpression::parse(path) {
        Ok(expression) => extract_parsed(value, &expression),
        Err(err) => {
            log::debug!("Path failed to parse, treating as absent: {err}");
            Extracted::Absent
        }
    }
}

/// Extract the value at an already-parsed path
#[must_use]
pub fn extract_parsed<'a>(value: &'a JsonValue, path: &PathExpression) -> Extracted<'a> {
    let mut current = value;

    for (position, segment) in path.segments().iter().enumerate() {
        let next = match segment {
            PathSegment::Key(key) => lookup_key(current, key),
            PathSegment::KeyIndex(key, index) => {
                lookup_key(current, key).and_then(|inner| lookup_index(inner, *index))
            }
            PathSegment::RootIndex(index) => lookup_index(current, *index),
        };

        match next {
            Some(inner) => current = inner,
            None => {
                log::trace!("Segment {position} (`{segment}`) of `{path}` did not resolve");
                return Extracted::Absent;
            }
        }
    }

    Extracted::from_value(current)
}

/// Extract the value at `path` and deserialize it into `T`
///
/// Unlike [`extract`], a malformed path is reported rather than treated as
/// absent. An unresolved path yields `Ok(None)`.
///
/// # Errors
///
/// - `ExtractError::Path` if `path` fails to parse
/// - `ExtractError::Deserialize` if the present value does not match `T`
pub fn extract_as<T: DeserializeOwned>(value: &JsonValue, path: &str) -> ExtractResult<Option<T>> {
    let expression = PathExpression::parse(path)?;
    extract_parsed(value, &expression).deserialize()
}

#[inline]
fn lookup_key<'a>(value: &'a JsonValue, key: &str) -> Option<&'a JsonValue> {
    match value {
        JsonValue::Object(map) => map.get(key),
        _ => None,
    }
}

#[inline]
fn lookup_index(value: &JsonValue, index: usize) -> Option<&JsonValue> {
    match value {
        JsonValue::Array(items) => items.get(index),
        _ => None,
    }
}
