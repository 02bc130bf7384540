//! Conversion between form values and backend payloads.
//!
//! Form inputs hold strings. The backend expects numbers for numeric
//! fields and real booleans for flags such as `isactive`.

use chrono::NaiveDate;
use serde_json::{Number, Value};

use crate::error::CoreError;
use crate::schema::{EntitySchema, FieldSpec, PayloadType};
use crate::types::Record;
use crate::validation::evaluator::{parse_bool, value_text, DATE_FORMAT};

/// Shape validated form values into the JSON body the backend expects.
///
/// Only schema fields are emitted; anything else in `values` is dropped.
pub fn build_payload(schema: &EntitySchema, values: &Record) -> Result<Record, CoreError> {
    schema
        .fields
        .iter()
        .map(|field| -> Result<(String, Value), CoreError> {
            let value = coerce_value(field, values.get(field.name))?;
            Ok((field.name.to_string(), value))
        })
        .collect()
}

/// Coerce one raw form value to the field's payload type.
///
/// Blank numeric, boolean and date values become `null`.
pub fn coerce_value(field: &FieldSpec, value: Option<&Value>) -> Result<Value, CoreError> {
    let raw = value_text(value);
    let text = raw.trim();

    match field.payload {
        PayloadType::Text => Ok(Value::String(text.to_string())),
        _ if text.is_empty() => Ok(Value::Null),
        PayloadType::Integer => text
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| invalid(field, "a whole number")),
        PayloadType::Decimal => text
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| invalid(field, "a number")),
        PayloadType::Boolean => parse_bool(text)
            .map(Value::Bool)
            .ok_or_else(|| invalid(field, "true or false")),
        PayloadType::Date => NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(|d| Value::String(d.format(DATE_FORMAT).to_string()))
            .map_err(|_| invalid(field, "a valid date")),
    }
}

/// Render a backend value as the string a form input holds.
///
/// Used when populating an update form from a fetched record. Timestamps
/// in date fields are cut down to their `YYYY-MM-DD` prefix.
pub fn to_form_value(field: &FieldSpec, value: Option<&Value>) -> Value {
    let text = value_text(value);
    if field.payload == PayloadType::Date {
        if let Some(prefix) = text.get(..10) {
            if NaiveDate::parse_from_str(prefix, DATE_FORMAT).is_ok() {
                return Value::String(prefix.to_string());
            }
        }
    }
    Value::String(text)
}

fn invalid(field: &FieldSpec, expected: &str) -> CoreError {
    CoreError::Validation(format!("{} must be {expected}", field.label))
}
