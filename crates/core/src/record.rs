//! Accessors over untyped backend records.

use serde_json::Value;

use crate::types::{EntityId, Record};

/// The record's numeric id. Accepts a JSON number or a numeric string,
/// under `id` or the backend's `_id` alias.
pub fn record_id(record: &Record) -> Option<EntityId> {
    ["id", "_id"]
        .iter()
        .filter_map(|key| record.get(*key))
        .find_map(|value| match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
}

/// A field rendered as display text (`""` when absent or null).
pub fn field_text(record: &Record, field: &str) -> String {
    match record.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
