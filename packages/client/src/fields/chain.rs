//! Ordered path fallback

use serde_json::Value as JsonValue;

use super::policy::FallbackPolicy;
use crate::extractor::{PathExtractor, extract};
use crate::null_semantics::Extracted;

/// Resolve the first path in `paths` whose outcome `policy` accepts
///
/// Paths are tried in order and evaluation stops at the first accepted one.
/// If none is accepted the result is [`Extracted::Absent`], even when some
/// paths resolved to values the policy skipped. When `extractor` is given its
/// limits and statistics apply to every attempt.
pub fn resolve_chain<'a, I, P>(
    value: &'a JsonValue,
    paths: I,
    policy: FallbackPolicy,
    extractor: Option<&PathExtractor>,
) -> Extracted<'a>
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    for path in paths {
        let path = path.as_ref();
        let extracted = match extractor {
            Some(extractor) => extractor.extract(value, path),
            None => extract(value, path),
        };
        if policy.accepts(&extracted) {
            return extracted;
        }
        log::trace!("Fallback path `{path}` not accepted under {policy:?}");
    }
    Extracted::Absent
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_then_code() {
        let doc = json!({"attributes": {"name": "", "code": "HERO_01"}});
        let paths = ["attributes.name", "attributes.code"];

        assert_eq!(
            resolve_chain(&doc, paths, FallbackPolicy::FirstNonNull, None).value(),
            Some(&json!(""))
        );
        assert_eq!(
            resolve_chain(&doc, paths, FallbackPolicy::FirstNonEmpty, None).value(),
            Some(&json!("HERO_01"))
        );
    }

    #[test]
    fn nothing_accepted_is_absent() {
        let doc = json!({"a": null});
        assert!(resolve_chain(&doc, ["a", "b"], FallbackPolicy::FirstNonNull, None).is_absent());
        assert!(resolve_chain(&doc, ["a", "b"], FallbackPolicy::FirstPresent, None).is_null());
        assert!(resolve_chain(&doc, Vec::<String>::new(), FallbackPolicy::FirstPresent, None).is_absent());
    }
}
