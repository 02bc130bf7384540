//! Reference-data lookups for dropdowns and list labels.

use futures::future::join_all;
use indexmap::IndexMap;
use lims_core::schema::{EntitySchema, FieldSpec, OptionItem, OptionSource};

use crate::backend::{LimsBackend, PageRequest};

/// Options per reference field, in schema order. A failed lookup carries
/// the user-facing message instead of options.
pub type ReferenceOptions = IndexMap<&'static str, Result<Vec<OptionItem>, String>>;

/// Fetch the source collection of every reference field concurrently.
///
/// All lookups run to completion; one failing never prevents the others
/// from populating. Nothing is retried.
pub async fn fetch_reference_options(
    backend: &dyn LimsBackend,
    token: &str,
    schema: &EntitySchema,
) -> ReferenceOptions {
    let fields: Vec<&FieldSpec> = schema.reference_fields().collect();
    let results = join_all(fields.iter().map(|field| lookup(backend, token, field))).await;

    fields.iter().map(|field| field.name).zip(results).collect()
}

async fn lookup(
    backend: &dyn LimsBackend,
    token: &str,
    field: &FieldSpec,
) -> Result<Vec<OptionItem>, String> {
    let OptionSource::Reference {
        entity,
        value_field,
        label_field,
    } = field.options
    else {
        return Ok(Vec::new());
    };

    match backend.list(token, entity, &PageRequest::All).await {
        Ok(envelope) => Ok(envelope
            .records
            .iter()
            .filter_map(|record| OptionItem::from_record(record, value_field, label_field))
            .collect()),
        Err(err) => {
            tracing::warn!(
                field = field.name,
                entity = %entity,
                error = %err,
                "Reference lookup failed"
            );
            Err(err.user_message())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use lims_core::entity::EntityKind;
    use lims_core::types::{EntityId, Record};
    use serde_json::{json, Value};

    use super::*;
    use crate::envelope::ListEnvelope;
    use crate::error::ApiError;

    /// Serves fixed collections; kinds listed in `failing` answer 500.
    struct StubBackend {
        failing: Vec<EntityKind>,
        listed: Mutex<Vec<EntityKind>>,
    }

    #[async_trait]
    impl LimsBackend for StubBackend {
        async fn list(
            &self,
            _token: &str,
            kind: EntityKind,
            _page: &PageRequest,
        ) -> Result<ListEnvelope, ApiError> {
            self.listed.lock().unwrap().push(kind);
            if self.failing.contains(&kind) {
                return Err(ApiError::from_body(500, r#"{"message": "Nodal service down"}"#));
            }
            let records = match kind {
                EntityKind::Role => json!([{"id": 1, "rolename": "Admin"}, {"id": 2}]),
                EntityKind::Hospital => json!([{"id": 7, "hospitalname": "City Hospital"}]),
                _ => json!([]),
            };
            let records = records
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v.as_object().cloned().unwrap())
                .collect();
            Ok(ListEnvelope::bare(records))
        }

        async fn fetch(&self, _: &str, _: EntityKind, _: EntityId) -> Result<Record, ApiError> {
            unimplemented!()
        }

        async fn create(&self, _: &str, _: EntityKind, _: &Record) -> Result<Value, ApiError> {
            unimplemented!()
        }

        async fn update(
            &self,
            _: &str,
            _: EntityKind,
            _: EntityId,
            _: &Record,
        ) -> Result<Value, ApiError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn one_failed_lookup_does_not_block_others() {
        let backend = StubBackend {
            failing: vec![EntityKind::Nodal],
            listed: Mutex::new(Vec::new()),
        };
        let options = fetch_reference_options(&backend, "t", EntityKind::User.schema()).await;

        let keys: Vec<_> = options.keys().copied().collect();
        assert_eq!(keys, vec!["roleid", "hospitalid", "nodalid"]);

        let roles = options["roleid"].as_ref().unwrap();
        assert_eq!(roles[0].label, "Admin");
        assert_eq!(roles[1].label, "2");
        assert_eq!(options["hospitalid"].as_ref().unwrap()[0].value, "7");
        assert_eq!(options["nodalid"], Err("Nodal service down".to_string()));

        assert_eq!(backend.listed.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn schema_without_references_makes_no_calls() {
        let backend = StubBackend {
            failing: Vec::new(),
            listed: Mutex::new(Vec::new()),
        };
        let options = fetch_reference_options(&backend, "t", EntityKind::Unit.schema()).await;
        assert!(options.is_empty());
        assert!(backend.listed.lock().unwrap().is_empty());
    }
}
