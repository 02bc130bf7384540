//! List search and pagination helpers.
//!
//! Pure functions shared by client-side and server-side paged lists.

use crate::record::field_text;
use crate::types::Record;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of rows per list page.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Maximum number of rows per list page.
pub const MAX_PAGE_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Case-insensitive substring match of `term` across `fields` of `record`.
///
/// Numbers and booleans are matched on their display text. A blank term
/// matches every record.
pub fn matches_search(record: &Record, fields: &[&str], term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field_text(record, field).to_lowercase().contains(&needle))
}

/// Normalize an optional search parameter. Blank becomes `None`.
pub fn normalize_term(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Clamping
// ---------------------------------------------------------------------------

/// Clamp a user-provided limit to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided 1-based page number to at least 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Number of pages needed for `total` rows at `limit` rows per page.
pub fn page_count(total: i64, limit: i64) -> i64 {
    if total <= 0 || limit <= 0 {
        return 0;
    }
    total / limit + i64::from(total % limit != 0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
