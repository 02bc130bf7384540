//! Create and update submission handlers.
//!
//! Both validate the posted values against the entity schema first; an
//! invalid form never reaches the backend.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lims_client::submit;
use lims_core::entity::EntityKind;
use lims_core::form::FormState;
use lims_core::types::Record;

use super::forms::load_record;
use crate::error::AppResult;
use crate::middleware::rbac::RequireEntityAccess;
use crate::response::SubmitResponse;
use crate::state::AppState;

fn submitted<T: serde::Serialize>(
    state: &AppState,
    kind: EntityKind,
    data: T,
    verb: &str,
) -> SubmitResponse<T> {
    SubmitResponse {
        data,
        notice: format!("{} {verb} successfully", kind.label()),
        redirect_to: kind.list_route(),
        redirect_after_ms: state.config.redirect_delay_ms,
    }
}

/// POST /api/v1/entities/{entity}
///
/// Validate, shape the payload, and create the record on the backend.
pub async fn create_record(
    access: RequireEntityAccess,
    State(state): State<AppState>,
    Json(input): Json<Record>,
) -> AppResult<impl IntoResponse> {
    let kind = access.kind;
    let mut form = FormState::for_create(kind.schema(), &access.session.default_context());
    form.apply(&input);

    let submission = form.submission()?;
    let created = submit(state.backend.as_ref(), &access.session.token, &submission).await?;

    tracing::info!(
        entity = %kind,
        path = %submission.path(),
        "Record created",
    );

    Ok((
        StatusCode::CREATED,
        Json(submitted(&state, kind, created, "added")),
    ))
}

/// PUT /api/v1/entities/{entity}/{id}
///
/// Fetch the record, lay the posted values over it (locked fields keep
/// their stored value), validate, and update it on the backend.
pub async fn update_record(
    access: RequireEntityAccess,
    State(state): State<AppState>,
    Path((_, raw_id)): Path<(String, String)>,
    Json(input): Json<Record>,
) -> AppResult<impl IntoResponse> {
    let kind = access.kind;
    let (id, record) = load_record(&state, &access, &raw_id).await?;

    let mut form = FormState::for_update(kind.schema(), id, &record);
    form.apply(&input);
    if !form.ignored.is_empty() {
        tracing::debug!(entity = %kind, id, ignored = ?form.ignored, "Locked fields left unchanged");
    }

    let submission = form.submission()?;
    let updated = submit(state.backend.as_ref(), &access.session.token, &submission).await?;

    tracing::info!(entity = %kind, id, "Record updated");

    Ok(Json(submitted(&state, kind, updated, "updated")))
}
