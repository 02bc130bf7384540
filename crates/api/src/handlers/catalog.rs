//! Handlers describing the entity catalog and field schemas.

use axum::response::IntoResponse;
use axum::Json;
use lims_core::entity::{EntityKind, Pagination};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireEntityAccess;
use crate::middleware::session::ConsoleSession;
use crate::response::DataResponse;

/// One menu entry of the console.
#[derive(Debug, Serialize)]
pub struct EntitySummary {
    pub entity: EntityKind,
    pub label: &'static str,
    pub pagination: Pagination,
    pub list_route: String,
    pub create_route: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_role: Option<&'static str>,
    /// Whether the calling session may open these screens.
    pub accessible: bool,
}

/// GET /api/v1/entities
///
/// List every managed entity with its console routes.
pub async fn list_entities(session: ConsoleSession) -> AppResult<impl IntoResponse> {
    let entities: Vec<EntitySummary> = EntityKind::all()
        .iter()
        .map(|&kind| EntitySummary {
            entity: kind,
            label: kind.label(),
            pagination: kind.pagination(),
            list_route: kind.list_route(),
            create_route: kind.create_route(),
            required_role: kind.required_role(),
            accessible: session.can_manage(kind),
        })
        .collect();

    Ok(Json(DataResponse { data: entities }))
}

/// GET /api/v1/entities/{entity}/schema
///
/// Field descriptors shared by the entity's add and update forms.
pub async fn get_schema(access: RequireEntityAccess) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: access.kind.schema(),
    }))
}
