use serde_json::Value;

/// Shown when the backend gives no usable message of its own.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Client-side API error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response. `message` is the body's `message` (or `error`)
    /// field when it had one.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a [`ApiError::Server`] from a raw error body.
    pub fn from_body(status: u16, body: &str) -> Self {
        ApiError::Server {
            status,
            message: extract_message(body),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Network(err) => err.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Text to show the user: the server's own message, else the fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } => message.clone(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// Pull a human-readable message out of a JSON error body.
fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(*key))
        .find_map(|v| match v {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Object(inner) => inner
                .get("message")
                .and_then(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.trim().to_string()),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn server_message_is_preferred() {
        let err = ApiError::from_body(409, r#"{"message": "Nodal name already exists"}"#);
        assert_eq!(err.user_message(), "Nodal name already exists");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn error_field_is_accepted() {
        let err = ApiError::from_body(400, r#"{"error": "Bad pincode"}"#);
        assert_eq!(err.user_message(), "Bad pincode");

        let err = ApiError::from_body(400, r#"{"error": {"message": "Nested"}}"#);
        assert_eq!(err.user_message(), "Nested");
    }

    #[test]
    fn fallback_when_body_has_no_message() {
        for body in ["", "<html>502</html>", r#"{"message": "  "}"#, r#"{"ok": false}"#] {
            let err = ApiError::from_body(500, body);
            assert_matches!(err, ApiError::Server { message: None, .. });
            assert_eq!(err.user_message(), FALLBACK_MESSAGE);
        }
    }

    #[test]
    fn decode_errors_use_fallback() {
        let err = ApiError::Decode("expected array".into());
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
        assert_eq!(err.status(), None);
    }
}
