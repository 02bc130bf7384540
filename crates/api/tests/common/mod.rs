#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use lims_client::{ApiError, LimsBackend, ListEnvelope, PageRequest};
use lims_core::entity::EntityKind;
use lims_core::record::record_id;
use lims_core::types::{EntityId, Record};
use serde_json::Value;
use tower::ServiceExt;

use lims_console::config::{LogFormat, ServerConfig};
use lims_console::router::build_app_router;
use lims_console::state::AppState;

pub const TOKEN: &str = "test-token";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        api_base_url: "http://lims.test/api".to_string(),
        backend_timeout_secs: 5,
        redirect_delay_ms: 1500,
        default_page_size: 10,
        max_page_size: 100,
        log_format: LogFormat::Pretty,
    }
}

/// Build the full application router over the given fake backend.
///
/// Uses the same `build_app_router` as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app(backend: Arc<FakeBackend>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        backend,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// In-memory backend
// ---------------------------------------------------------------------------

/// One call received by the fake backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List { kind: EntityKind, page: PageRequest },
    Fetch { kind: EntityKind, id: EntityId },
    Create { kind: EntityKind, payload: Record },
    Update { kind: EntityKind, id: EntityId, payload: Record },
}

/// In-memory [`LimsBackend`] that records every call and the token it
/// was made with.
#[derive(Default)]
pub struct FakeBackend {
    collections: Mutex<HashMap<EntityKind, Vec<Record>>>,
    meta: Mutex<HashMap<EntityKind, (i64, i64)>>,
    list_failures: Mutex<HashMap<EntityKind, (u16, String)>>,
    write_failure: Mutex<Option<(u16, String)>>,
    calls: Mutex<Vec<Call>>,
    tokens: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seed a collection from a JSON array of objects.
    pub fn seed(&self, kind: EntityKind, records: Value) {
        let records = records
            .as_array()
            .expect("seed expects an array")
            .iter()
            .map(|r| r.as_object().cloned().expect("seed expects objects"))
            .collect();
        self.collections.lock().unwrap().insert(kind, records);
    }

    /// Report these totals in `meta` when listing `kind`.
    pub fn set_meta(&self, kind: EntityKind, total_items: i64, total_pages: i64) {
        self.meta
            .lock()
            .unwrap()
            .insert(kind, (total_items, total_pages));
    }

    /// Make listing `kind` fail with the given status and body.
    pub fn fail_list(&self, kind: EntityKind, status: u16, body: &str) {
        self.list_failures
            .lock()
            .unwrap()
            .insert(kind, (status, body.to_string()));
    }

    /// Make every create and update fail with the given status and body.
    pub fn fail_writes(&self, status: u16, body: &str) {
        *self.write_failure.lock().unwrap() = Some((status, body.to_string()));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }

    /// Create and update calls only.
    pub fn writes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Create { .. } | Call::Update { .. }))
            .collect()
    }

    fn record(&self, token: &str, call: Call) {
        self.tokens.lock().unwrap().push(token.to_string());
        self.calls.lock().unwrap().push(call);
    }

    fn write_result(&self) -> Result<(), ApiError> {
        match &*self.write_failure.lock().unwrap() {
            Some((status, body)) => Err(ApiError::from_body(*status, body)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LimsBackend for FakeBackend {
    async fn list(
        &self,
        token: &str,
        kind: EntityKind,
        page: &PageRequest,
    ) -> Result<ListEnvelope, ApiError> {
        self.record(token, Call::List { kind, page: *page });

        if let Some((status, body)) = self.list_failures.lock().unwrap().get(&kind) {
            return Err(ApiError::from_body(*status, body));
        }

        let records = self
            .collections
            .lock()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_default();
        let meta = self.meta.lock().unwrap().get(&kind).copied();

        Ok(ListEnvelope {
            records,
            total_items: meta.map(|m| m.0),
            total_pages: meta.map(|m| m.1),
        })
    }

    async fn fetch(&self, token: &str, kind: EntityKind, id: EntityId) -> Result<Record, ApiError> {
        self.record(token, Call::Fetch { kind, id });

        self.collections
            .lock()
            .unwrap()
            .get(&kind)
            .and_then(|records| records.iter().find(|r| record_id(r) == Some(id)).cloned())
            .ok_or_else(|| ApiError::from_body(404, r#"{"message": "Record not found"}"#))
    }

    async fn create(
        &self,
        token: &str,
        kind: EntityKind,
        payload: &Record,
    ) -> Result<Value, ApiError> {
        self.record(
            token,
            Call::Create {
                kind,
                payload: payload.clone(),
            },
        );
        self.write_result()?;

        let mut created = payload.clone();
        created.insert("id".into(), Value::from(101));
        Ok(Value::Object(created))
    }

    async fn update(
        &self,
        token: &str,
        kind: EntityKind,
        id: EntityId,
        payload: &Record,
    ) -> Result<Value, ApiError> {
        self.record(
            token,
            Call::Update {
                kind,
                id,
                payload: payload.clone(),
            },
        );
        self.write_result()?;

        let mut updated = payload.clone();
        updated.insert("id".into(), Value::from(id));
        Ok(Value::Object(updated))
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request through the router.
pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn authed(method: &str, uri: &str, role: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {TOKEN}"));
    match role {
        Some(role) => builder.header("x-role-type", role),
        None => builder,
    }
}

/// GET as an admin session.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    get_as(app, uri, Some("admin")).await
}

/// GET with a bearer token and the given role type.
pub async fn get_as(app: Router, uri: &str, role: Option<&str>) -> Response<Body> {
    send(app, authed("GET", uri, role).body(Body::empty()).unwrap()).await
}

/// GET without any session headers.
pub async fn get_anonymous(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

/// POST a JSON body as an admin session.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = authed("POST", uri, Some("admin"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// PUT a JSON body as an admin session.
pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = authed("PUT", uri, Some("admin"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
