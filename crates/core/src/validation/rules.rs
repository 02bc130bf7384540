//! Validation rule and result types.

use serde::Serialize;

/// A single check attached to a form field. Every rule carries the message
/// shown inline when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    Required {
        message: &'static str,
    },
    Pattern {
        pattern: &'static str,
        message: &'static str,
    },
    MinLength {
        min: usize,
        message: &'static str,
    },
    MaxLength {
        max: usize,
        message: &'static str,
    },
    MinValue {
        min: f64,
        message: &'static str,
    },
    MaxValue {
        max: f64,
        message: &'static str,
    },
    Email {
        message: &'static str,
    },
    /// `YYYY-MM-DD` calendar date.
    Date {
        message: &'static str,
    },
    /// Value must be one of the field's static choices.
    OneOf {
        message: &'static str,
    },
}

impl Rule {
    /// Short machine name, as reported in [`FieldViolation::rule`].
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Required { .. } => "required",
            Rule::Pattern { .. } => "pattern",
            Rule::MinLength { .. } => "min_length",
            Rule::MaxLength { .. } => "max_length",
            Rule::MinValue { .. } => "min_value",
            Rule::MaxValue { .. } => "max_value",
            Rule::Email { .. } => "email",
            Rule::Date { .. } => "date",
            Rule::OneOf { .. } => "one_of",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required { message }
            | Rule::Pattern { message, .. }
            | Rule::MinLength { message, .. }
            | Rule::MaxLength { message, .. }
            | Rule::MinValue { message, .. }
            | Rule::MaxValue { message, .. }
            | Rule::Email { message }
            | Rule::Date { message }
            | Rule::OneOf { message } => *message,
        }
    }
}

/// Aggregated result of checking every field of one form.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

impl ValidationResult {
    pub fn error_for(&self, field: &str) -> Option<&FieldViolation> {
        self.errors.iter().find(|e| e.field == field)
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule: String,
    pub message: String,
}
