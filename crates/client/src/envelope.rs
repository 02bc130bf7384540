//! Response-shape normalization.
//!
//! Backend list endpoints answer either with a bare JSON array or with
//! `{ "data": [...], "meta": { "totalItems", "totalPages" } }`. Single
//! records come bare or wrapped in `{ "data": {...} }`.

use lims_core::listing::PageMeta;
use lims_core::search::page_count;
use lims_core::types::Record;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

/// A normalized list response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListEnvelope {
    pub records: Vec<Record>,
    pub total_items: Option<i64>,
    pub total_pages: Option<i64>,
}

impl ListEnvelope {
    pub fn bare(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Server totals, if the response carried any. A missing
    /// `totalPages` is derived from `totalItems` and `limit`.
    pub fn page_meta(&self, limit: i64) -> Option<PageMeta> {
        let total_items = self.total_items?;
        Some(PageMeta {
            total_items,
            total_pages: self
                .total_pages
                .unwrap_or_else(|| page_count(total_items, limit)),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListBody {
    Bare(Vec<Record>),
    Wrapped {
        data: Vec<Record>,
        #[serde(default)]
        meta: Option<WireMeta>,
    },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMeta {
    #[serde(default, deserialize_with = "lenient_i64")]
    total_items: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    total_pages: Option<i64>,
}

/// Accept counts sent as numbers or numeric strings.
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

pub fn parse_list(body: Value) -> Result<ListEnvelope, ApiError> {
    let parsed: ListBody = serde_json::from_value(body)
        .map_err(|e| ApiError::Decode(format!("list body: {e}")))?;

    Ok(match parsed {
        ListBody::Bare(records) => ListEnvelope::bare(records),
        ListBody::Wrapped { data, meta } => {
            let (total_items, total_pages) = meta
                .map(|m| (m.total_items, m.total_pages))
                .unwrap_or((None, None));
            ListEnvelope {
                records: data,
                total_items,
                total_pages,
            }
        }
    })
}

pub fn parse_record(body: Value) -> Result<Record, ApiError> {
    match unwrap_data(body) {
        Value::Object(record) => Ok(record),
        other => Err(ApiError::Decode(format!(
            "expected a record object, got {}",
            kind_of(&other)
        ))),
    }
}

/// Keys a `{ "data": ... }` response wrapper may carry beside `data`.
const ENVELOPE_KEYS: &[&str] = &["data", "meta", "message", "success", "status"];

/// Strip a `{ "data": ... }` wrapper if present.
///
/// An object is only treated as a wrapper when all of its keys are
/// envelope keys, so a record with its own `data` field stays intact.
pub fn unwrap_data(body: Value) -> Value {
    match body {
        Value::Object(mut map)
            if map.get("data").is_some_and(Value::is_object)
                && map.keys().all(|key| ENVELOPE_KEYS.contains(&key.as_str())) =>
        {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
