use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use indexmap::IndexMap;
use lims_client::ApiError;
use lims_core::error::CoreError;
use lims_core::form::FormError;
use lims_core::validation::ValidationResult;
use serde_json::{json, Value};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`ApiError`] for backend
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `lims_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Form values failed validation; nothing was sent to the backend.
    #[error("Validation failed on {} field(s)", .0.errors.len())]
    Invalid(ValidationResult),

    /// The LIMS backend rejected the call or could not be reached.
    #[error("Backend error: {0}")]
    Upstream(#[from] ApiError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Invalid(result) => AppError::Invalid(result),
            FormError::Core(core) => AppError::Core(core),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Extra top-level key carried alongside `error` and `code`.
        let mut extra: Option<(&str, Value)> = None;

        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::UnknownEntity(name) => (
                    StatusCode::NOT_FOUND,
                    "UNKNOWN_ENTITY",
                    format!("Unknown entity type: {name}"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::MissingContext {
                    message,
                    redirect_to,
                    ..
                } => {
                    extra = Some(("redirect_to", json!(redirect_to)));
                    (StatusCode::NOT_FOUND, "MISSING_CONTEXT", message.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
            },

            // --- Form validation ---
            AppError::Invalid(result) => {
                let fields: IndexMap<&str, &str> = result
                    .errors
                    .iter()
                    .map(|v| (v.field.as_str(), v.message.as_str()))
                    .collect();
                extra = Some(("fields", json!(fields)));
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    "Please correct the highlighted fields".to_string(),
                )
            }

            // --- Backend errors ---
            AppError::Upstream(err) => classify_upstream_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });
        if let (Some((key, value)), Some(map)) = (extra, body.as_object_mut()) {
            map.insert(key.to_string(), value);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a backend error into an HTTP status, error code, and message.
///
/// - Backend 4xx responses keep their status.
/// - 5xx, network and decode failures map to 502.
///
/// The message is the backend's own when it sent one, else the generic
/// fallback.
fn classify_upstream_error(err: &ApiError) -> (StatusCode, &'static str, String) {
    let client_error = err
        .status()
        .and_then(|s| StatusCode::from_u16(s).ok())
        .filter(|s| s.is_client_error());

    match client_error {
        Some(status) => {
            tracing::warn!(error = %err, "Backend rejected request");
            (status, "UPSTREAM_ERROR", err.user_message())
        }
        None => {
            tracing::error!(error = %err, "Backend call failed");
            (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", err.user_message())
        }
    }
}
