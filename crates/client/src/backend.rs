//! The backend seam.

use async_trait::async_trait;
use lims_core::entity::EntityKind;
use lims_core::form::{FormMode, Submission};
use lims_core::types::{EntityId, Record};
use serde_json::Value;

use crate::envelope::ListEnvelope;
use crate::error::ApiError;

/// Which slice of a collection to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// The whole collection (client-side paging, reference lookups).
    All,
    /// One 1-based page. Only sent to server-paginated resources.
    Page { page: i64, limit: i64 },
}

/// CRUD access to the LIMS REST backend. `token` is the session's bearer
/// token, passed through as-is.
#[async_trait]
pub trait LimsBackend: Send + Sync + 'static {
    async fn list(
        &self,
        token: &str,
        kind: EntityKind,
        page: &PageRequest,
    ) -> Result<ListEnvelope, ApiError>;

    async fn fetch(&self, token: &str, kind: EntityKind, id: EntityId) -> Result<Record, ApiError>;

    async fn create(&self, token: &str, kind: EntityKind, payload: &Record)
        -> Result<Value, ApiError>;

    async fn update(
        &self,
        token: &str,
        kind: EntityKind,
        id: EntityId,
        payload: &Record,
    ) -> Result<Value, ApiError>;
}

/// Send a validated form: POST for create, PUT with the id for update.
pub async fn submit(
    backend: &dyn LimsBackend,
    token: &str,
    submission: &Submission,
) -> Result<Value, ApiError> {
    match submission.mode {
        FormMode::Create => {
            backend
                .create(token, submission.entity, &submission.payload)
                .await
        }
        FormMode::Update { id } => {
            backend
                .update(token, submission.entity, id, &submission.payload)
                .await
        }
    }
}
