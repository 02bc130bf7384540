//! List screen handler.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use indexmap::IndexMap;
use lims_client::{fetch_reference_options, PageRequest};
use lims_core::entity::Pagination;
use lims_core::listing::{from_server, paginate_client, ListPage};
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireEntityAccess;
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ListView {
    #[serde(flatten)]
    pub page: ListPage,
    /// Reference lookups that failed; their `<field>_label` is absent.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub lookup_errors: IndexMap<&'static str, String>,
}

/// GET /api/v1/entities/{entity}?page=&limit=&search=&sort=&order=
///
/// Client-paginated entities are fetched whole and paged here.
/// Server-paginated entities are fetched one page at a time and keep the
/// backend's totals. Reference lookups for display names run alongside
/// the list fetch.
pub async fn list_records(
    access: RequireEntityAccess,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let kind = access.kind;
    let schema = kind.schema();
    let token = access.session.token.as_str();
    let query = params.to_query(&state.config);

    let request = match kind.pagination() {
        Pagination::Client => PageRequest::All,
        Pagination::Server => PageRequest::Page {
            page: query.page,
            limit: query.limit,
        },
    };

    let (envelope, lookups) = tokio::join!(
        state.backend.list(token, kind, &request),
        fetch_reference_options(state.backend.as_ref(), token, schema),
    );
    let envelope = envelope?;

    let mut page = match kind.pagination() {
        Pagination::Client => paginate_client(envelope.records, schema, &query),
        Pagination::Server => {
            let meta = envelope.page_meta(query.limit);
            from_server(envelope.records, meta, schema, &query)
        }
    };

    let mut lookup_errors = IndexMap::new();
    for (field, result) in lookups {
        match result {
            Ok(options) => page.attach_labels(field, &options),
            Err(message) => {
                lookup_errors.insert(field, message);
            }
        }
    }

    tracing::debug!(
        entity = %kind,
        page = page.page,
        rows = page.rows.len(),
        total_items = page.total_items,
        "Listed records",
    );

    Ok(Json(DataResponse {
        data: ListView {
            page,
            lookup_errors,
        },
    }))
}
