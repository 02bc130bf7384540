//! Rule evaluator — pure logic, no I/O.

use chrono::NaiveDate;
use serde_json::Value;
use validator::ValidateEmail;

use super::rules::{FieldViolation, Rule, ValidationResult};
use crate::schema::{patterns, EntitySchema, FieldSpec, PayloadType};
use crate::types::Record;

/// Date format used by every date input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Evaluate every field of `schema` against raw form values.
///
/// Keys in `values` that the schema does not know are ignored.
pub fn evaluate(schema: &EntitySchema, values: &Record) -> ValidationResult {
    let errors: Vec<FieldViolation> = schema
        .fields
        .iter()
        .filter_map(|field| evaluate_field(field, values.get(field.name)))
        .collect();

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Check one field. Returns the first violation, if any.
pub fn evaluate_field(field: &FieldSpec, value: Option<&Value>) -> Option<FieldViolation> {
    let text = value_text(value);
    let text = text.trim();

    if text.is_empty() {
        return field
            .rules
            .iter()
            .find(|rule| matches!(rule, Rule::Required { .. }))
            .map(|rule| violation(field, rule.name(), rule.message()));
    }

    for rule in field.rules {
        if !rule_passes(rule, field, text) {
            return Some(violation(field, rule.name(), rule.message()));
        }
    }

    type_check(field, text)
}

/// Render any JSON scalar the way a form input would hold it.
pub(crate) fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

fn rule_passes(rule: &Rule, field: &FieldSpec, text: &str) -> bool {
    match *rule {
        Rule::Required { .. } => true,
        // Only shared patterns are compiled; anything else never matches.
        Rule::Pattern { pattern, .. } => {
            patterns::compiled(pattern).is_some_and(|re| re.is_match(text))
        }
        Rule::MinLength { min, .. } => text.chars().count() >= min,
        Rule::MaxLength { max, .. } => text.chars().count() <= max,
        // Non-numeric input is reported by the type check instead.
        Rule::MinValue { min, .. } => text.parse::<f64>().map_or(true, |n| n >= min),
        Rule::MaxValue { max, .. } => text.parse::<f64>().map_or(true, |n| n <= max),
        Rule::Email { .. } => text.validate_email(),
        Rule::Date { .. } => NaiveDate::parse_from_str(text, DATE_FORMAT).is_ok(),
        Rule::OneOf { .. } => field
            .static_choices()
            .map_or(true, |choices| choices.iter().any(|c| c.value == text)),
    }
}

/// Implicit check that a value can be coerced to the field's payload type.
fn type_check(field: &FieldSpec, text: &str) -> Option<FieldViolation> {
    let expected = match field.payload {
        PayloadType::Text => return None,
        PayloadType::Integer if text.parse::<i64>().is_err() => "a whole number",
        PayloadType::Decimal if !text.parse::<f64>().is_ok_and(f64::is_finite) => "a number",
        PayloadType::Boolean if parse_bool(text).is_none() => "true or false",
        PayloadType::Date if NaiveDate::parse_from_str(text, DATE_FORMAT).is_err() => {
            "a valid date"
        }
        _ => return None,
    };
    let message = format!("{} must be {expected}", field.label);
    Some(FieldViolation {
        field: field.name.to_string(),
        rule: "type_check".to_string(),
        message,
    })
}

/// `"true"`/`"false"` in any case.
pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn violation(field: &FieldSpec, rule: &str, message: &str) -> FieldViolation {
    FieldViolation {
        field: field.name.to_string(),
        rule: rule.to_string(),
        message: message.to_string(),
    }
}
