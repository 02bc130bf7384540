use std::sync::Arc;

use lims_client::LimsBackend;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// The LIMS REST backend. Tests swap in an in-memory fake.
    pub backend: Arc<dyn LimsBackend>,
}
