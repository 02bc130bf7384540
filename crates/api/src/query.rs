//! Shared query parameter types for API handlers.

use lims_core::listing::{ListQuery, SortOrder};
use lims_core::search::{clamp_limit, clamp_page, normalize_term};
use serde::Deserialize;

use crate::config::ServerConfig;

/// List screen parameters (`?page=&limit=&search=&sort=&order=`).
///
/// `page` is 1-based. Values are clamped via `clamp_page` / `clamp_limit`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
}

impl ListParams {
    pub fn to_query(&self, config: &ServerConfig) -> ListQuery {
        ListQuery {
            page: clamp_page(self.page),
            limit: clamp_limit(self.limit, config.default_page_size, config.max_page_size),
            search: normalize_term(self.search.as_deref()),
            sort: normalize_term(self.sort.as_deref()),
            order: self.order.unwrap_or_default(),
        }
    }
}
