/// Backend primary keys are numeric.
pub type EntityId = i64;

/// A flat REST resource as returned by (and sent to) the backend.
pub type Record = serde_json::Map<String, serde_json::Value>;
