//! The filter/search predicate: pure, total, never panics on missing fields.

use crate::query::types::FacetFilters;
use verdex_contracts::plant_like::PlantLike;
use verdex_model::filter_types::Facet;

/// Case-insensitive substring containment. An empty field never contains a
/// non-empty needle, so missing fields cannot satisfy a constraint.
fn contains_ci(field: &str, needle_lower: &str) -> bool {
    !field.is_empty() && field.to_lowercase().contains(needle_lower)
}

fn matches_search<P: PlantLike>(item: &P, term: &str) -> bool {
    let term = term.to_lowercase();
    item.search_fields()
        .iter()
        .any(|field| contains_ci(field, &term))
}

fn matches_facets<P: PlantLike>(item: &P, filters: &FacetFilters) -> bool {
    Facet::all().iter().all(|&facet| match filters.get(facet) {
        Some(value) => contains_ci(item.facet_field(facet), &value.to_lowercase()),
        None => true,
    })
}

/// True iff the item should be displayed for the given query state.
///
/// Free text matches any field (OR); facets must all hold (AND); facet
/// values match by containment so "Summer" hits "Spring, Summer, Monsoon".
pub fn matches<P: PlantLike>(item: &P, search: Option<&str>, filters: &FacetFilters) -> bool {
    let term = search.map(str::trim).filter(|s| !s.is_empty());
    if let Some(term) = term {
        if !matches_search(item, term) {
            return false;
        }
    }
    matches_facets(item, filters)
}
