//! Reference-option handlers and helpers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use indexmap::IndexMap;
use lims_client::{fetch_reference_options, ReferenceOptions};
use lims_core::schema::OptionItem;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireEntityAccess;
use crate::response::DataResponse;
use crate::state::AppState;

/// Dropdown choices of one reference field. A failed lookup yields no
/// options and the message to show beside the field.
#[derive(Debug, Serialize)]
pub struct FieldOptions {
    pub options: Vec<OptionItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn options_view(lookups: ReferenceOptions) -> IndexMap<&'static str, FieldOptions> {
    lookups
        .into_iter()
        .map(|(field, result)| {
            let view = match result {
                Ok(options) => FieldOptions {
                    options,
                    error: None,
                },
                Err(message) => FieldOptions {
                    options: Vec::new(),
                    error: Some(message),
                },
            };
            (field, view)
        })
        .collect()
}

/// GET /api/v1/entities/{entity}/options
///
/// Look up every reference field's choices in parallel. One failed lookup
/// is reported on its field and does not affect the others.
pub async fn get_options(
    access: RequireEntityAccess,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let lookups = fetch_reference_options(
        state.backend.as_ref(),
        &access.session.token,
        access.kind.schema(),
    )
    .await;

    Ok(Json(DataResponse {
        data: options_view(lookups),
    }))
}
