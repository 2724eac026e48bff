use keyparity_core::{DocumentId, ParsedTree};
use proptest::prelude::*;
use serde_json::{Map, Value};

/// Build `(id, tree)` members from name/value pairs
#[allow(dead_code)]
pub fn members(docs: &[(&str, Value)]) -> Vec<(DocumentId, ParsedTree)> {
    docs.iter()
        .map(|(name, tree)| (DocumentId::new(*name), tree.clone()))
        .collect()
}

/// Document ids from names
#[allow(dead_code)]
pub fn ids(names: &[&str]) -> Vec<DocumentId> {
    names.iter().map(|n| DocumentId::new(*n)).collect()
}

/// Render missing paths of a result as strings
#[allow(dead_code)]
pub fn missing_strings(result: &keyparity_core::ComparisonResult) -> Vec<String> {
    result.missing_paths().map(|p| p.to_string()).collect()
}

fn object(entries: Vec<(String, Value)>) -> Value {
    let mut map = Map::new();
    for (key, value) in entries {
        map.insert(key, value);
    }
    Value::Object(map)
}

/// Arbitrary nested value over a small key alphabet so documents overlap
#[allow(dead_code)]
pub fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        "[a-z]{0,4}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(("[a-c]{1,2}", inner.clone()), 0..4).prop_map(object),
            prop::collection::vec(inner, 0..3).prop_map(Value::Array),
        ]
    })
}

/// Arbitrary document whose root is a mapping
#[allow(dead_code)]
pub fn arb_document() -> impl Strategy<Value = Value> {
    prop::collection::vec(("[a-c]{1,2}", arb_value()), 0..5).prop_map(object)
}

/// Between one and four arbitrary documents named `d0`, `d1`, ...
#[allow(dead_code)]
pub fn arb_group() -> impl Strategy<Value = Vec<(DocumentId, ParsedTree)>> {
    prop::collection::vec(arb_document(), 1..5).prop_map(|docs| {
        docs.into_iter()
            .enumerate()
            .map(|(i, tree)| (DocumentId::new(format!("d{}", i)), tree))
            .collect()
    })
}
