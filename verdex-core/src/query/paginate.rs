//! Pagination slicer with clamping semantics.

use crate::query::types::{PageResult, Pagination};

/// Slice one page out of the ordered list.
///
/// `total_pages` is at least 1 even for an empty list; out-of-range page
/// requests clamp into `[1, total_pages]` rather than erroring, so a stale
/// page number after a filter change still renders content.
pub fn paginate<T: Clone>(items: &[T], pagination: Pagination) -> PageResult<T> {
    let per_page = pagination.per_page.max(1);
    let total_matches = items.len();
    let total_pages = total_matches.div_ceil(per_page).max(1);
    let page = pagination.page.clamp(1, total_pages);

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total_matches);
    let items = if start < total_matches {
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    PageResult {
        items,
        page,
        total_pages,
        total_matches,
    }
}
