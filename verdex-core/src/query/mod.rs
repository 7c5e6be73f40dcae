//! The browsing pipeline: predicate → stable sort → pagination.
//!
//! Data flows one way through pure functions; callers hand in a catalog
//! snapshot and get a page back, nothing here mutates shared state.

pub mod paginate;
pub mod predicate;
pub mod sorting;
pub mod types;

pub use types::{CatalogQuery, FacetFilters, PageResult, Pagination, DEFAULT_PAGE_SIZE};

use verdex_contracts::plant_like::PlantLike;

/// Run the full filter/search/sort/paginate pipeline over a snapshot.
pub fn execute<P: PlantLike + Clone>(items: &[P], query: &CatalogQuery) -> PageResult<P> {
    let mut matched: Vec<&P> = items
        .iter()
        .filter(|item| predicate::matches(*item, query.search_term(), &query.filters))
        .collect();
    sorting::sort_items(&mut matched, query.sort);
    let ordered: Vec<P> = matched.into_iter().cloned().collect();
    paginate::paginate(&ordered, query.pagination)
}
