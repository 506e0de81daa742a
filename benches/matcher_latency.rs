use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

use valmatch::domain::{RuleDef, RuleDocument};
use valmatch::{from_json, to_json, RuleSet, ValueMatcher};

fn bench_evaluate(c: &mut Criterion) {
    let range = ValueMatcher::between(3, 7);
    let string = ValueMatcher::string_equals("gold");
    let value = json!(5);
    let tier = json!("gold");

    c.bench_function("range_evaluate_hit", |b| {
        b.iter(|| range.matches(black_box(&value)))
    });

    c.bench_function("string_equals_evaluate_hit", |b| {
        b.iter(|| string.matches(black_box(&tier)))
    });
}

fn bench_codec(c: &mut Criterion) {
    let payload = json!({"value": {"at_least": 3, "at_most": 7}});
    let matcher = ValueMatcher::between(3, 7);

    c.bench_function("decode_range", |b| {
        b.iter(|| from_json(black_box(&payload)))
    });

    c.bench_function("encode_range", |b| b.iter(|| to_json(black_box(&matcher))));
}

fn bench_ruleset(c: &mut Criterion) {
    let rules = (0..32)
        .map(|i| RuleDef {
            id: format!("R{i}"),
            key: Some(format!("field_{}", i % 8)),
            scope: vec!["user".to_string()],
            matcher: ValueMatcher::at_least(i),
        })
        .collect();
    let ruleset = RuleSet::from_document(&RuleDocument {
        version: "bench".to_string(),
        rules,
    });

    let document = json!({"user": {
        "field_0": 1, "field_1": 5, "field_2": 10, "field_3": 15,
        "field_4": 20, "field_5": 25, "field_6": 30, "field_7": 35,
    }});

    c.bench_function("ruleset_32_rules", |b| {
        b.iter(|| ruleset.evaluate(black_box(&document)))
    });
}

criterion_group!(benches, bench_evaluate, bench_codec, bench_ruleset);
criterion_main!(benches);
