#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown entity type: {0}")]
    UnknownEntity(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The update screen was reached without a record to edit.
    #[error("Missing context for {entity}: {message}")]
    MissingContext {
        entity: &'static str,
        message: String,
        redirect_to: String,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}
