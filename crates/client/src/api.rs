//! HTTP implementation of [`LimsBackend`] using [`reqwest`].

use std::time::Duration;

use async_trait::async_trait;
use lims_core::entity::{EntityKind, Pagination};
use lims_core::types::{EntityId, Record};
use serde_json::Value;

use crate::backend::{LimsBackend, PageRequest};
use crate::envelope::{parse_list, parse_record, unwrap_data, ListEnvelope};
use crate::error::ApiError;

/// HTTP client for the LIMS REST backend.
///
/// Every entity lives under the one base URL: collections at
/// `{base}/{resource}`, records at `{base}/{resource}/{id}`.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client with its own connection pool and a per-request
    /// timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ---- private helpers ----

    /// Return the response unchanged on 2xx, or an [`ApiError::Server`]
    /// carrying the body's message.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_body(status.as_u16(), &body));
        }
        Ok(response)
    }

    /// Read a successful response as JSON. An empty body reads as `null`.
    async fn read_json(response: reqwest::Response) -> Result<Value, ApiError> {
        let response = Self::ensure_success(response).await?;
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(format!("response body: {e}")))
    }
}

/// Query parameters for a list request. Client-paginated resources are
/// always fetched whole.
pub fn page_params(kind: EntityKind, page: &PageRequest) -> Vec<(&'static str, i64)> {
    match (kind.pagination(), page) {
        (Pagination::Server, PageRequest::Page { page, limit }) => {
            vec![("page", *page), ("limit", *limit)]
        }
        _ => Vec::new(),
    }
}

#[async_trait]
impl LimsBackend for ApiClient {
    async fn list(
        &self,
        token: &str,
        kind: EntityKind,
        page: &PageRequest,
    ) -> Result<ListEnvelope, ApiError> {
        let url = self.url(&kind.collection_path());
        let params = page_params(kind, page);
        tracing::debug!(entity = %kind, %url, ?params, "Listing records");

        let response = self
            .http
            .get(&url)
            .query(&params)
            .bearer_auth(token)
            .send()
            .await?;
        parse_list(Self::read_json(response).await?)
    }

    async fn fetch(&self, token: &str, kind: EntityKind, id: EntityId) -> Result<Record, ApiError> {
        let url = self.url(&kind.record_path(id));
        tracing::debug!(entity = %kind, id, %url, "Fetching record");

        let response = self.http.get(&url).bearer_auth(token).send().await?;
        parse_record(Self::read_json(response).await?)
    }

    async fn create(
        &self,
        token: &str,
        kind: EntityKind,
        payload: &Record,
    ) -> Result<Value, ApiError> {
        let url = self.url(&kind.collection_path());
        tracing::debug!(entity = %kind, %url, "Creating record");

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        Ok(unwrap_data(Self::read_json(response).await?))
    }

    async fn update(
        &self,
        token: &str,
        kind: EntityKind,
        id: EntityId,
        payload: &Record,
    ) -> Result<Value, ApiError> {
        let url = self.url(&kind.record_path(id));
        tracing::debug!(entity = %kind, id, %url, "Updating record");

        let response = self
            .http
            .put(&url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        Ok(unwrap_data(Self::read_json(response).await?))
    }
}
