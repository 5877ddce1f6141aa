//! Tests for the fluent extraction builder

use fieldpath::prelude::*;
use fieldpath::Fieldpath;
use serde_json::{Value, json};

fn task_response() -> Value {
    json!({
        "data": [
            {
                "id": 9001,
                "attributes": {
                    "content": "Animation",
                    "sg_status_list": null,
                    "due_date": "",
                    "est_in_mins": 480
                },
                "relationships": {
                    "task_assignees": {"data": [{"type": "HumanUser", "id": 42, "name": "Sam"}]}
                }
            }
        ]
    })
}

#[test]
fn test_single_path() {
    let doc = task_response();
    let content = Fieldpath::on(&doc).path("data[0].attributes.content").get();
    assert_eq!(content.value(), Some(&json!("Animation")));
}

#[test]
fn test_fallback_chain_under_policies() {
    let doc = task_response();

    let status = Fieldpath::on(&doc)
        .path("data[0].attributes.sg_status_list")
        .or_path("data[0].attributes.content");
    assert_eq!(status.get().value(), Some(&json!("Animation")));

    let status_or_null = status.clone().policy(FallbackPolicy::FirstPresent);
    assert!(status_or_null.get().is_null());

    let due = Fieldpath::on(&doc)
        .path("data[0].attributes.due_date")
        .non_empty()
        .or_default("unscheduled");
    assert!(due.get().is_absent());
    assert_eq!(due.as_string(), "unscheduled");
}

#[test]
fn test_default_only_applies_to_owned_terminals() {
    let doc = task_response();
    let builder = Fieldpath::on(&doc).path("data[1].id").or_default(0);

    assert!(builder.get().is_absent());
    assert_eq!(builder.get_or_default(), Some(json!(0)));
    assert_eq!(Fieldpath::on(&doc).path("data[1].id").get_or_default(), None);
    assert_eq!(Fieldpath::on(&doc).path("data[1].id").as_string(), "");
}

#[test]
fn test_typed_terminal() {
    let doc = task_response();

    let minutes: Option<u32> = Fieldpath::on(&doc)
        .path("data[0].attributes.est_in_mins")
        .deserialize()
        .expect("number fits u32");
    assert_eq!(minutes, Some(480));

    let assignee_ids: Option<Vec<Value>> = Fieldpath::on(&doc)
        .path("data[0].relationships.task_assignees.data")
        .deserialize()
        .expect("array");
    assert_eq!(assignee_ids.map(|ids| ids.len()), Some(1));

    let wrong = Fieldpath::on(&doc)
        .path("data[0].attributes.content")
        .deserialize::<u32>();
    assert!(matches!(wrong, Err(ExtractError::Deserialize(_))));
}

#[test]
fn test_shared_extractor_records_every_attempt() {
    let doc = task_response();
    let extractor = PathExtractor::new();

    let name = Fieldpath::on(&doc)
        .extractor(&extractor)
        .debug()
        .path("data[0].relationships.task_assignees.data[0].login")
        .or_path("data[0].relationships.task_assignees.data[0].name")
        .as_string();
    assert_eq!(name, "Sam");

    let snapshot = extractor.stats().snapshot();
    assert_eq!(snapshot.extractions, 2);
    assert_eq!(snapshot.hits, 1);
    assert_eq!(snapshot.absences, 1);
}

#[test]
fn test_extract_shorthand() {
    let doc = json!([{"id": 1}]);
    assert_eq!(Fieldpath::extract(&doc, "[0].id").value(), Some(&json!(1)));
    assert!(Fieldpath::extract(&doc, "[0][0]").is_absent());
}

#[test]
fn test_paths_accessor_preserves_order() {
    let doc = json!({});
    let builder = Fieldpath::on(&doc).path("a").or_path("b").or_path("c");
    assert_eq!(builder.paths(), ["a", "b", "c"]);
}
