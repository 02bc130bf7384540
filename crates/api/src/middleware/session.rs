//! Session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use lims_core::entity::EntityKind;
use lims_core::error::CoreError;
use lims_core::form::DefaultContext;
use lims_core::roles::is_known_role;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the caller's coarse role type (`admin`, `nodal`, ...).
pub const ROLE_TYPE_HEADER: &str = "x-role-type";

/// The caller's session: the backend bearer token and, optionally, the role
/// type issued with it.
///
/// The token is not inspected here; it is forwarded verbatim to the LIMS
/// backend, which is the authority on its validity.
///
/// ```ignore
/// async fn my_handler(session: ConsoleSession) -> AppResult<Json<()>> {
///     tracing::info!(role = ?session.role_type, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConsoleSession {
    pub token: String,
    pub role_type: Option<String>,
}

impl ConsoleSession {
    /// Whether this session may manage `kind`.
    pub fn can_manage(&self, kind: EntityKind) -> bool {
        match kind.required_role() {
            Some(required) => self.role_type.as_deref() == Some(required),
            None => true,
        }
    }

    /// Inputs for add-form defaults.
    pub fn default_context(&self) -> DefaultContext {
        DefaultContext::new(self.role_type.clone())
    }
}

impl FromRequestParts<AppState> for ConsoleSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Invalid Authorization format. Expected: Bearer <token>".into(),
                ))
            })?;

        let role_type = parts
            .headers
            .get(ROLE_TYPE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim().to_ascii_lowercase())
            .filter(|v| !v.is_empty())
            .filter(|v| {
                let known = is_known_role(v);
                if !known {
                    tracing::debug!(role = %v, "Ignoring unknown role type");
                }
                known
            });

        Ok(ConsoleSession {
            token: token.to_string(),
            role_type,
        })
    }
}
