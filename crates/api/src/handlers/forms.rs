//! Add and update form handlers.
//!
//! The update form is addressed by record id and populated with a single
//! fetch of that record.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use indexmap::IndexMap;
use lims_client::fetch_reference_options;
use lims_core::entity::EntityKind;
use lims_core::error::CoreError;
use lims_core::form::FormState;
use lims_core::types::{EntityId, Record};
use serde::Serialize;

use super::reference::{options_view, FieldOptions};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEntityAccess;
use crate::response::DataResponse;
use crate::state::AppState;

/// Everything a form screen needs to render.
#[derive(Debug, Serialize)]
pub struct FormView {
    #[serde(flatten)]
    pub form: FormState,
    pub label: &'static str,
    pub options: IndexMap<&'static str, FieldOptions>,
    /// Where cancel, and a successful submit, lead.
    pub list_route: String,
}

/// The update screen was reached without a usable record.
pub(crate) fn missing_context(kind: EntityKind, message: String) -> AppError {
    AppError::Core(CoreError::MissingContext {
        entity: kind.label(),
        message,
        redirect_to: kind.list_route(),
    })
}

/// Parse the route id and fetch the record it names.
///
/// A malformed id, or a 404 from the backend, is a missing-context error
/// that sends the user back to the list.
pub(crate) async fn load_record(
    state: &AppState,
    access: &RequireEntityAccess,
    raw_id: &str,
) -> AppResult<(EntityId, Record)> {
    let kind = access.kind;
    let id: EntityId = raw_id
        .trim()
        .parse()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| {
            missing_context(kind, format!("No {} selected for update", kind.label()))
        })?;

    match state.backend.fetch(&access.session.token, kind, id).await {
        Ok(record) => Ok((id, record)),
        Err(err) if err.is_not_found() => Err(missing_context(
            kind,
            format!("{} with id {id} no longer exists", kind.label()),
        )),
        Err(err) => Err(err.into()),
    }
}

/// GET /api/v1/entities/{entity}/new
///
/// A fresh add form with defaults applied and reference options loaded.
pub async fn new_form(
    access: RequireEntityAccess,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let kind = access.kind;
    let form = FormState::for_create(kind.schema(), &access.session.default_context());
    let lookups =
        fetch_reference_options(state.backend.as_ref(), &access.session.token, kind.schema())
            .await;

    Ok(Json(DataResponse {
        data: FormView {
            form,
            label: kind.label(),
            options: options_view(lookups),
            list_route: kind.list_route(),
        },
    }))
}

/// GET /api/v1/entities/{entity}/{id}/edit
///
/// An update form populated from the record with that id. The record fetch
/// and the reference lookups run concurrently.
pub async fn edit_form(
    access: RequireEntityAccess,
    State(state): State<AppState>,
    Path((_, raw_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let kind = access.kind;
    let (loaded, lookups) = tokio::join!(
        load_record(&state, &access, &raw_id),
        fetch_reference_options(state.backend.as_ref(), &access.session.token, kind.schema()),
    );
    let (id, record) = loaded?;

    let form = FormState::for_update(kind.schema(), id, &record);

    Ok(Json(DataResponse {
        data: FormView {
            form,
            label: kind.label(),
            options: options_view(lookups),
            list_route: kind.list_route(),
        },
    }))
}
