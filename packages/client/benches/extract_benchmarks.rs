//! Path extraction benchmarks
//!
//! Measures parse-and-resolve against resolve-only with a pre-parsed path,
//! and field-table application over a typical entity response.

use std::hint::black_box;
use std::time::Instant;

use fieldpath_client::prelude::*;
use serde_json::{Value, json};

const ITERATIONS: u32 = 200_000;

fn main() {
    println!("Path extraction benchmarks\n");

    let doc = entity_listing(50);

    bench_parse_and_resolve(&doc);
    bench_resolve_parsed(&doc);
    bench_field_map(&doc);
}

fn entity_listing(count: u64) -> Value {
    let entities: Vec<Value> = (0..count)
        .map(|id| {
            json!({
                "type": "Asset",
                "id": id,
                "attributes": {"code": format!("ASSET_{id:03}"), "description": null},
                "relationships": {"project": {"data": {"type": "Project", "id": 85}}}
            })
        })
        .collect();
    json!({ "data": entities })
}

fn report(name: &str, started: Instant) {
    let elapsed = started.elapsed();
    println!(
        "{name:<28} {:>10.1} ns/op",
        elapsed.as_nanos() as f64 / f64::from(ITERATIONS)
    );
}

fn bench_parse_and_resolve(doc: &Value) {
    let started = Instant::now();
    for _ in 0..ITERATIONS {
        black_box(extract(black_box(doc), "data[42].relationships.project.data.id"));
    }
    report("parse + resolve", started);
}

fn bench_resolve_parsed(doc: &Value) {
    let path = PathExpression::parse("data[42].relationships.project.data.id")
        .unwrap_or_else(|err| panic!("benchmark path should parse: {err}"));
    let started = Instant::now();
    for _ in 0..ITERATIONS {
        black_box(extract_parsed(black_box(doc), &path));
    }
    report("resolve (pre-parsed)", started);
}

fn bench_field_map(doc: &Value) {
    let table = FieldMap::from_specs([
        FieldSpec::new("id", "data[7].id"),
        FieldSpec::new("name", "data[7].attributes.name").or_path("data[7].attributes.code"),
        FieldSpec::new("description", "data[7].attributes.description").with_default(json!("")),
        FieldSpec::new("project_id", "data[7].relationships.project.data.id"),
    ])
    .unwrap_or_else(|err| panic!("benchmark table should be valid: {err}"));

    let started = Instant::now();
    for _ in 0..ITERATIONS {
        black_box(table.apply(black_box(doc)));
    }
    report("field map (4 outputs)", started);
}
