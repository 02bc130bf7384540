//! Per-entity access control.
//!
//! [`RequireEntityAccess`] wraps [`ConsoleSession`], resolves the route's
//! `{entity}` segment to an [`EntityKind`], and rejects the request when the
//! session's role does not meet that entity's requirement.

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use lims_core::entity::EntityKind;
use lims_core::error::CoreError;

use super::session::ConsoleSession;
use crate::error::AppError;
use crate::state::AppState;

/// Resolved entity plus an authorized session. Rejects with 401 without a
/// session, 404 for an unknown entity, 403 when the role gate fails.
///
/// ```ignore
/// async fn handler(access: RequireEntityAccess) -> AppResult<Json<()>> {
///     // access.session may manage access.kind here
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireEntityAccess {
    pub kind: EntityKind,
    pub session: ConsoleSession,
}

impl FromRequestParts<AppState> for RequireEntityAccess {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = ConsoleSession::from_request_parts(parts, state).await?;

        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        let slug = params
            .get("entity")
            .ok_or_else(|| AppError::BadRequest("Missing entity in path".into()))?;
        let kind: EntityKind = slug.parse()?;

        if !session.can_manage(kind) {
            let required = kind.required_role().unwrap_or_default();
            return Err(AppError::Core(CoreError::Forbidden(format!(
                "{} management requires the {required} role",
                kind.label()
            ))));
        }

        Ok(RequireEntityAccess { kind, session })
    }
}
