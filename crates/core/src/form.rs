//! Add/update form state.
//!
//! A [`FormState`] holds the current input values of one form together with
//! its baseline: the defaults of a fresh add form, or the values fetched for
//! the record being updated. Resetting always returns to the baseline.
//!
//! Update forms are addressed by record id and populated from a single
//! fetch of that record; nothing is handed over from the list screen.

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::entity::EntityKind;
use crate::error::CoreError;
use crate::payload::{build_payload, to_form_value};
use crate::schema::{EntitySchema, FieldDefault, FieldLock};
use crate::types::{EntityId, Record};
use crate::validation::evaluator::{evaluate_field, value_text, DATE_FORMAT};
use crate::validation::{evaluate, ValidationResult};

/// Session-derived inputs for default values.
#[derive(Debug, Clone)]
pub struct DefaultContext {
    pub role_type: Option<String>,
    pub today: NaiveDate,
}

impl DefaultContext {
    pub fn new(role_type: Option<String>) -> Self {
        Self {
            role_type,
            today: Utc::now().date_naive(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FormMode {
    Create,
    Update { id: EntityId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubmitMethod {
    Post,
    Put,
}

/// A validated, payload-shaped form ready to send to the backend.
#[derive(Debug, Clone)]
pub struct Submission {
    pub entity: EntityKind,
    pub mode: FormMode,
    pub payload: Record,
}

impl Submission {
    /// Create submits with POST, update with PUT.
    pub fn method(&self) -> SubmitMethod {
        match self.mode {
            FormMode::Create => SubmitMethod::Post,
            FormMode::Update { .. } => SubmitMethod::Put,
        }
    }

    /// Backend path, relative to the API base URL.
    pub fn path(&self) -> String {
        match self.mode {
            FormMode::Create => self.entity.collection_path(),
            FormMode::Update { id } => self.entity.record_path(id),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Client-side validation failed; nothing may be sent.
    #[error("{} field(s) failed validation", .0.errors.len())]
    Invalid(ValidationResult),

    #[error(transparent)]
    Core(#[from] CoreError),
}

#[derive(Debug, Clone, Serialize)]
pub struct FormState {
    pub entity: EntityKind,
    #[serde(flatten)]
    pub mode: FormMode,
    pub values: Record,
    /// What [`FormState::reset`] returns to.
    pub baseline: Record,
    /// Fields that keep their baseline value regardless of input.
    pub locked: Vec<&'static str>,
    /// Locked fields the last [`FormState::apply`] tried to change.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored: Vec<&'static str>,
}

impl FormState {
    /// A fresh add form: defaults applied, computed fields locked.
    pub fn for_create(schema: &EntitySchema, ctx: &DefaultContext) -> Self {
        let baseline: Record = schema
            .fields
            .iter()
            .map(|field| {
                let value = match field.default {
                    FieldDefault::None => String::new(),
                    FieldDefault::Value(v) => v.to_string(),
                    FieldDefault::Today => ctx.today.format(DATE_FORMAT).to_string(),
                    FieldDefault::RoleType => ctx.role_type.clone().unwrap_or_default(),
                };
                (field.name.to_string(), Value::String(value))
            })
            .collect();

        let locked = schema
            .fields
            .iter()
            .filter(|f| f.lock == FieldLock::Always)
            .map(|f| f.name)
            .collect();

        Self::with_baseline(schema.entity, FormMode::Create, baseline, locked)
    }

    /// An update form populated from the fetched record.
    pub fn for_update(schema: &EntitySchema, id: EntityId, record: &Record) -> Self {
        let baseline: Record = schema
            .fields
            .iter()
            .map(|field| {
                (
                    field.name.to_string(),
                    to_form_value(field, record.get(field.name)),
                )
            })
            .collect();

        // A populated field whose stored value fails its own rules stays
        // editable so the record can still be saved.
        let locked = schema
            .fields
            .iter()
            .filter(|f| match f.lock {
                FieldLock::Editable => false,
                FieldLock::Always => true,
                FieldLock::AfterPopulate => evaluate_field(f, baseline.get(f.name)).is_none(),
            })
            .map(|f| f.name)
            .collect();

        Self::with_baseline(schema.entity, FormMode::Update { id }, baseline, locked)
    }

    fn with_baseline(
        entity: EntityKind,
        mode: FormMode,
        baseline: Record,
        locked: Vec<&'static str>,
    ) -> Self {
        Self {
            entity,
            mode,
            values: baseline.clone(),
            baseline,
            locked,
            ignored: Vec::new(),
        }
    }

    pub fn schema(&self) -> &'static EntitySchema {
        self.entity.schema()
    }

    pub fn is_locked(&self, field: &str) -> bool {
        self.locked.iter().any(|name| *name == field)
    }

    /// Replace the current values with `input` laid over the baseline.
    ///
    /// Fields absent from `input` keep their baseline value, so an omitted
    /// radio still submits its default. Unknown keys are dropped. Changes to
    /// locked fields are discarded and listed in `ignored`.
    pub fn apply(&mut self, input: &Record) {
        self.reset();
        let schema = self.schema();

        for (key, value) in input {
            let Some(field) = schema.field(key) else {
                continue;
            };
            if self.is_locked(field.name) {
                let current = value_text(self.baseline.get(field.name));
                if value_text(Some(value)).trim() != current.trim() {
                    self.ignored.push(field.name);
                }
                continue;
            }
            self.values.insert(field.name.to_string(), value.clone());
        }
    }

    /// Revert to the baseline: defaults for an add form, the fetched
    /// values for an update form.
    pub fn reset(&mut self) {
        self.values = self.baseline.clone();
        self.ignored.clear();
    }

    pub fn validate(&self) -> ValidationResult {
        evaluate(self.schema(), &self.values)
    }

    /// Validate, then shape the payload.
    pub fn submission(&self) -> Result<Submission, FormError> {
        let result = self.validate();
        if !result.is_valid {
            return Err(FormError::Invalid(result));
        }
        let payload = build_payload(self.schema(), &self.values)?;
        Ok(Submission {
            entity: self.entity,
            mode: self.mode,
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    fn ctx(role: Option<&str>) -> DefaultContext {
        DefaultContext {
            role_type: role.map(str::to_string),
            today: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    #[test]
    fn create_form_applies_defaults() {
        let form = FormState::for_create(EntityKind::User.schema(), &ctx(None));
        assert_eq!(form.values["isactive"], json!("true"));
        assert_eq!(form.values["createdon"], json!("2024-06-01"));
        assert_eq!(form.values["username"], json!(""));
        assert_eq!(form.locked, vec!["createdon"]);
        assert_eq!(form.mode, FormMode::Create);
    }

    #[test]
    fn role_type_default_comes_from_session() {
        let form = FormState::for_create(EntityKind::Technician.schema(), &ctx(Some("nodal")));
        assert_eq!(form.values["roletype"], json!("nodal"));
    }

    #[test]
    fn update_form_locks_populated_fields() {
        let form = FormState::for_update(
            EntityKind::User.schema(),
            5,
            &record(json!({"id": 5, "username": "asha", "isactive": false, "roleid": 2})),
        );
        assert!(form.is_locked("username"));
        assert!(form.is_locked("createdon"));
        assert!(!form.is_locked("email"));
        assert_eq!(form.values["isactive"], json!("false"));
        assert_eq!(form.values["roleid"], json!("2"));
    }

    #[test]
    fn apply_discards_locked_edits() {
        let mut form = FormState::for_update(
            EntityKind::Doctor.schema(),
            3,
            &record(json!({"doctorname": "Meera Rao", "registrationno": "KMC-1"})),
        );
        form.apply(&record(json!({"registrationno": "KMC-2", "doctorname": "Meera R"})));
        assert_eq!(form.values["registrationno"], json!("KMC-1"));
        assert_eq!(form.values["doctorname"], json!("Meera R"));
        assert_eq!(form.ignored, vec!["registrationno"]);
    }

    #[test]
    fn invalid_stored_value_stays_editable() {
        let mut form = FormState::for_update(
            EntityKind::Doctor.schema(),
            3,
            &record(json!({"doctorname": "Meera Rao", "registrationno": ""})),
        );
        assert!(!form.is_locked("registrationno"));

        form.apply(&record(json!({"registrationno": "KMC-9"})));
        assert_eq!(form.values["registrationno"], json!("KMC-9"));
        assert!(form.ignored.is_empty());
    }

    #[test]
    fn apply_keeps_defaults_for_omitted_fields() {
        let mut form = FormState::for_create(EntityKind::Unit.schema(), &ctx(None));
        form.apply(&record(json!({"unitname": "mmol/L"})));
        assert_eq!(form.values["isactive"], json!("true"));
    }

    #[test]
    fn reset_returns_to_fetched_values_not_blank() {
        let mut form = FormState::for_update(
            EntityKind::Color.schema(),
            9,
            &record(json!({"colorname": "Lavender", "colorcode": "#E6E6FA", "isactive": true})),
        );
        form.apply(&record(json!({"colorname": ""})));
        assert_eq!(form.values["colorname"], json!(""));
        form.reset();
        assert_eq!(form.values["colorname"], json!("Lavender"));
    }

    #[test]
    fn reset_returns_to_defaults_on_create() {
        let mut form = FormState::for_create(EntityKind::Unit.schema(), &ctx(None));
        form.apply(&record(json!({"unitname": "mg", "isactive": "false"})));
        form.reset();
        assert_eq!(form.values["unitname"], json!(""));
        assert_eq!(form.values["isactive"], json!("true"));
    }

    #[test]
    fn invalid_form_yields_no_submission() {
        let form = FormState::for_create(EntityKind::Department.schema(), &ctx(None));
        assert_matches!(
            form.submission(),
            Err(FormError::Invalid(result))
                if result.error_for("departmentname").unwrap().message
                    == "Department name is required"
        );
    }

    #[test]
    fn create_submission_posts_to_collection() {
        let mut form = FormState::for_create(EntityKind::Nodal.schema(), &ctx(None));
        form.apply(&record(json!({
            "nodalname": "Second Nodal",
            "address": "MG Road",
            "pincode": "560001",
        })));
        let submission = form.submission().unwrap();
        assert_eq!(submission.method(), SubmitMethod::Post);
        assert_eq!(submission.path(), "/nodal");
        assert_eq!(submission.payload["isactive"], json!(true));
    }

    #[test]
    fn update_submission_puts_to_record_path() {
        let form = FormState::for_update(
            EntityKind::Color.schema(),
            42,
            &record(json!({"colorname": "Red", "colorcode": "#F00", "isactive": true})),
        );
        let submission = form.submission().unwrap();
        assert_eq!(submission.method(), SubmitMethod::Put);
        assert_eq!(submission.path(), "/color/42");
    }
}
