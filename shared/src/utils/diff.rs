// Partial-update payloads: only the fields the user actually changed are sent back.
use anyhow::{anyhow, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Returns the entries of `updated` whose value differs from the same key in `original`.
///
/// The diff is driven by `updated`: a key missing from `original` is always reported,
/// a key missing from `updated` never is. Nested objects and arrays are compared as
/// whole values. Numbers compare by numeric value, so `1` and `1.0` are the same.
pub fn diff_fields(original: &Map<String, Value>, updated: &Map<String, Value>) -> Map<String, Value> {
    updated
        .iter()
        .filter(|(key, new_value)| {
            original
                .get(key.as_str())
                .map_or(true, |old_value| !same_value(old_value, new_value))
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Serializes two versions of a record and diffs them field by field.
pub fn diff_records<T: Serialize>(original: &T, updated: &T) -> Result<Map<String, Value>> {
    let original = into_object(serde_json::to_value(original)?)?;
    let updated = into_object(serde_json::to_value(updated)?)?;
    Ok(diff_fields(&original, &updated))
}

fn into_object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(anyhow!("Cannot diff a non-object record: {}", other)),
    }
}

fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) if x.is_f64() || y.is_f64() => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}
