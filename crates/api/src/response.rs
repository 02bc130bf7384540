//! Shared response envelope types for API handlers.
//!
//! Reads use a `{ "data": ... }` envelope. Successful form submissions add
//! the notice to show and where the UI should go next.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Envelope for a successful create or update.
///
/// The UI shows `notice`, waits `redirect_after_ms`, then navigates to
/// `redirect_to` (the entity's list route).
#[derive(Debug, Serialize)]
pub struct SubmitResponse<T: Serialize> {
    pub data: T,
    pub notice: String,
    pub redirect_to: String,
    pub redirect_after_ms: u64,
}
