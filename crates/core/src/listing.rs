//! List view model.
//!
//! Turns fetched records into a [`ListPage`]: filtered by the search term,
//! ordered, paged, and with an update route per row. Client-paginated
//! entities are paged here in memory; server-paginated entities arrive
//! already paged and keep the server's totals.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::entity::{EntityKind, Pagination};
use crate::record::{field_text, record_id};
use crate::schema::{EntitySchema, OptionItem};
use crate::search::{matches_search, page_count, DEFAULT_PAGE_LIMIT};
use crate::types::{EntityId, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Page, search and ordering requested for a list screen. `page` is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub page: i64,
    pub limit: i64,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            search: None,
            sort: None,
            order: SortOrder::Asc,
        }
    }
}

impl ListQuery {
    /// Rows to skip for the current page. Saturates for absurd page
    /// numbers, which then simply yield an empty page.
    pub fn offset(&self) -> usize {
        let rows = self
            .page
            .saturating_sub(1)
            .max(0)
            .saturating_mul(self.limit.max(0));
        usize::try_from(rows).unwrap_or(usize::MAX)
    }
}

/// Totals reported for a paged collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub total_items: i64,
    pub total_pages: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListRow {
    pub id: Option<EntityId>,
    pub record: Record,
    /// Console route of the row's update form. Absent when the record
    /// carries no usable id.
    pub update_route: Option<String>,
}

impl ListRow {
    fn new(entity: EntityKind, record: Record) -> Self {
        let id = record_id(&record);
        Self {
            id,
            update_route: id.map(|id| entity.update_route(id)),
            record,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListPage {
    pub entity: EntityKind,
    pub pagination: Pagination,
    pub page: i64,
    pub limit: i64,
    pub total_items: i64,
    pub total_pages: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub rows: Vec<ListRow>,
}

impl ListPage {
    /// Add `<field>_label` to every row whose `field` value matches one of
    /// the looked-up options.
    pub fn attach_labels(&mut self, field: &str, options: &[OptionItem]) {
        let key = format!("{field}_label");
        for row in &mut self.rows {
            let value = field_text(&row.record, field);
            if let Some(option) = options.iter().find(|o| o.value == value) {
                row.record
                    .insert(key.clone(), serde_json::Value::String(option.label.clone()));
            }
        }
    }
}

/// Page a whole in-memory collection: filter, order, then slice.
///
/// Totals count the filtered set.
pub fn paginate_client(records: Vec<Record>, schema: &EntitySchema, query: &ListQuery) -> ListPage {
    let mut matching = filter(records, schema, query);
    sort_records(&mut matching, sort_field(schema, query), query.order);

    let total_items = matching.len() as i64;
    let rows = matching
        .into_iter()
        .skip(query.offset())
        .take(query.limit.max(0) as usize)
        .map(|record| ListRow::new(schema.entity, record))
        .collect();

    ListPage {
        entity: schema.entity,
        pagination: Pagination::Client,
        page: query.page,
        limit: query.limit,
        total_items,
        total_pages: page_count(total_items, query.limit),
        search: query.search.clone(),
        rows,
    }
}

/// Wrap one page returned by the backend.
///
/// Totals come from the server's `meta` as-is; only when it is absent are
/// they derived from the rows at hand. Search narrows the current page
/// and an explicit sort reorders it.
pub fn from_server(
    records: Vec<Record>,
    meta: Option<PageMeta>,
    schema: &EntitySchema,
    query: &ListQuery,
) -> ListPage {
    let mut matching = filter(records, schema, query);
    if query.sort.is_some() {
        sort_records(&mut matching, sort_field(schema, query), query.order);
    }

    let meta = meta.unwrap_or_else(|| {
        let total_items = matching.len() as i64;
        PageMeta {
            total_items,
            total_pages: page_count(total_items, query.limit),
        }
    });

    ListPage {
        entity: schema.entity,
        pagination: Pagination::Server,
        page: query.page,
        limit: query.limit,
        total_items: meta.total_items,
        total_pages: meta.total_pages,
        search: query.search.clone(),
        rows: matching
            .into_iter()
            .map(|record| ListRow::new(schema.entity, record))
            .collect(),
    }
}

fn filter(records: Vec<Record>, schema: &EntitySchema, query: &ListQuery) -> Vec<Record> {
    match query.search.as_deref() {
        Some(term) => records
            .into_iter()
            .filter(|r| matches_search(r, schema.search_fields, term))
            .collect(),
        None => records,
    }
}

/// The requested sort field if the schema knows it (or it is `id`),
/// otherwise the schema's default.
fn sort_field<'a>(schema: &'a EntitySchema, query: &'a ListQuery) -> &'a str {
    match query.sort.as_deref() {
        Some(field) if field == "id" || schema.field(field).is_some() => field,
        _ => schema.sort_field,
    }
}

/// Stable sort on one field. Values that both parse as numbers compare
/// numerically, everything else case-insensitively as text.
pub fn sort_records(records: &mut [Record], field: &str, order: SortOrder) {
    records.sort_by(|a, b| {
        let ordering = compare_values(&field_text(a, field), &field_text(b, field));
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare_values(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}
