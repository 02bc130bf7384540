//! Declarative field descriptors.
//!
//! One [`EntitySchema`] per entity drives both the add and the update form:
//! which inputs to render, their defaults and locks, how each value is
//! validated, and what JSON type it becomes in the submitted payload.

pub mod catalog;
pub mod patterns;

use serde::Serialize;

use crate::entity::EntityKind;
use crate::record::field_text;
use crate::types::Record;
use crate::validation::rules::Rule;

/// Input widget for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    Date,
    Email,
    Select,
    Radio,
}

/// JSON type a field's value is coerced to on submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadType {
    Text,
    Integer,
    Decimal,
    Boolean,
    Date,
}

/// One selectable choice of a select or radio field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// A resolved dropdown choice, static or looked up from another entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionItem {
    pub value: String,
    pub label: String,
}

impl OptionItem {
    /// Build a choice from a referenced record. Records without a value are
    /// skipped; a missing label falls back to the value.
    pub fn from_record(record: &Record, value_field: &str, label_field: &str) -> Option<Self> {
        let value = field_text(record, value_field);
        if value.trim().is_empty() {
            return None;
        }
        let label = match field_text(record, label_field) {
            l if l.trim().is_empty() => value.clone(),
            l => l,
        };
        Some(Self { value, label })
    }
}

impl From<&FieldOption> for OptionItem {
    fn from(option: &FieldOption) -> Self {
        Self {
            value: option.value.to_string(),
            label: option.label.to_string(),
        }
    }
}

/// Where a select/radio field gets its choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum OptionSource {
    None,
    Static {
        choices: &'static [FieldOption],
    },
    /// Choices are the records of another entity. `value_field` is what the
    /// payload stores (an id or a name), `label_field` what the user sees.
    Reference {
        entity: EntityKind,
        value_field: &'static str,
        label_field: &'static str,
    },
}

/// Initial value of a field on a fresh add form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldDefault {
    None,
    Value(&'static str),
    /// Today's date (`YYYY-MM-DD`).
    Today,
    /// The session's role type.
    RoleType,
}

/// When a field stops accepting edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldLock {
    Editable,
    /// Computed value, never editable.
    Always,
    /// Editable on create, frozen once populated from an existing record.
    AfterPopulate,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub options: OptionSource,
    pub default: FieldDefault,
    pub lock: FieldLock,
    pub payload: PayloadType,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    pub const fn new(
        name: &'static str,
        label: &'static str,
        kind: FieldKind,
        payload: PayloadType,
    ) -> Self {
        Self {
            name,
            label,
            kind,
            options: OptionSource::None,
            default: FieldDefault::None,
            lock: FieldLock::Editable,
            payload,
            rules: &[],
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text, PayloadType::Text)
    }

    pub const fn text_area(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::TextArea, PayloadType::Text)
    }

    pub const fn email(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Email, PayloadType::Text)
    }

    pub const fn integer(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number, PayloadType::Integer)
    }

    pub const fn decimal(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number, PayloadType::Decimal)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date, PayloadType::Date)
    }

    pub const fn select(
        name: &'static str,
        label: &'static str,
        choices: &'static [FieldOption],
    ) -> Self {
        let mut spec = Self::new(name, label, FieldKind::Select, PayloadType::Text);
        spec.options = OptionSource::Static { choices };
        spec
    }

    /// A dropdown fed by another entity's records.
    pub const fn reference(
        name: &'static str,
        label: &'static str,
        entity: EntityKind,
        value_field: &'static str,
        label_field: &'static str,
        payload: PayloadType,
    ) -> Self {
        let mut spec = Self::new(name, label, FieldKind::Select, payload);
        spec.options = OptionSource::Reference {
            entity,
            value_field,
            label_field,
        };
        spec
    }

    /// The `isactive` radio every entity carries.
    pub const fn active_flag() -> Self {
        let mut spec = Self::new("isactive", "Status", FieldKind::Radio, PayloadType::Boolean);
        spec.options = OptionSource::Static {
            choices: ACTIVE_CHOICES,
        };
        spec.default = FieldDefault::Value("true");
        spec.rules = &[Rule::Required {
            message: "Please select a status",
        }];
        spec
    }

    pub const fn with_rules(mut self, rules: &'static [Rule]) -> Self {
        self.rules = rules;
        self
    }

    pub const fn with_default(mut self, default: FieldDefault) -> Self {
        self.default = default;
        self
    }

    pub const fn with_lock(mut self, lock: FieldLock) -> Self {
        self.lock = lock;
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules
            .iter()
            .any(|rule| matches!(rule, Rule::Required { .. }))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.payload, PayloadType::Integer | PayloadType::Decimal)
    }

    /// Static choices, if this is a select/radio with a fixed option list.
    pub fn static_choices(&self) -> Option<&'static [FieldOption]> {
        match self.options {
            OptionSource::Static { choices } => Some(choices),
            _ => None,
        }
    }
}

const ACTIVE_CHOICES: &[FieldOption] = &[
    FieldOption {
        value: "true",
        label: "Active",
    },
    FieldOption {
        value: "false",
        label: "Inactive",
    },
];

/// Field layout and list behaviour of one entity.
#[derive(Debug, Serialize)]
pub struct EntitySchema {
    pub entity: EntityKind,
    pub fields: &'static [FieldSpec],
    /// Fields matched by the list screen's free-text search.
    pub search_fields: &'static [&'static str],
    /// Field shown when another entity references a record of this one.
    pub display_field: &'static str,
    /// Default list ordering.
    pub sort_field: &'static str,
}

impl EntitySchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields whose choices come from another entity.
    pub fn reference_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields
            .iter()
            .filter(|f| matches!(f.options, OptionSource::Reference { .. }))
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.is_required())
    }
}
