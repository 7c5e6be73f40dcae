//! End-to-end checks of the browsing pipeline over the seed catalog.

use verdex_contracts::plant_like::PlantLike;
use verdex_core::catalog::seed::seed_catalog;
use verdex_core::query::{self, CatalogQuery, FacetFilters, Pagination};
use verdex_model::SortKey;

fn names(items: &[verdex_model::PlantRecord]) -> Vec<&str> {
    items.iter().map(|p| p.common_name()).collect()
}

#[test]
fn summer_facet_excludes_year_round_entries() {
    let catalog = seed_catalog();
    let result = query::execute(
        &catalog,
        &CatalogQuery {
            filters: FacetFilters {
                season: Some("Summer".to_string()),
                ..FacetFilters::default()
            },
            ..CatalogQuery::default()
        },
    );

    let mut matched = names(&result.items);
    matched.sort_unstable();
    assert_eq!(
        matched,
        vec![
            "German Chamomile",
            "Lavender",
            "Peppermint",
            "Purple Coneflower",
            "Tulsi",
            "Turmeric",
        ]
    );
    assert!(!matched.contains(&"Aloe Vera"));
}

#[test]
fn scientific_sort_starts_with_aloe() {
    let catalog = seed_catalog();
    let result = query::execute(
        &catalog,
        &CatalogQuery {
            sort: SortKey::Scientific,
            ..CatalogQuery::default()
        },
    );
    assert_eq!(
        result.items[0].scientific_name.as_deref(),
        Some("Aloe barbadensis miller")
    );
}

#[test]
fn adding_facets_never_grows_the_result() {
    let catalog = seed_catalog();
    let unconstrained = query::execute(&catalog, &CatalogQuery::default());

    let mut one_facet = CatalogQuery::default();
    one_facet.filters.season = Some("Summer".to_string());
    let with_one = query::execute(&catalog, &one_facet);

    let mut two_facets = one_facet.clone();
    two_facets.filters.plant_type = Some("Herb".to_string());
    let with_two = query::execute(&catalog, &two_facets);

    assert!(with_one.total_matches <= unconstrained.total_matches);
    assert!(with_two.total_matches <= with_one.total_matches);
}

#[test]
fn sorting_is_idempotent() {
    let catalog = seed_catalog();
    let query = CatalogQuery {
        sort: SortKey::Region,
        ..CatalogQuery::default()
    };
    let once = query::execute(&catalog, &query);
    let twice = query::execute(&once.items, &query);
    assert_eq!(names(&once.items), names(&twice.items));
}

#[test]
fn concatenated_pages_reproduce_the_ordered_list() {
    let catalog = seed_catalog();
    let all = query::execute(&catalog, &CatalogQuery::default());

    let mut rebuilt = Vec::new();
    let per_page = 3;
    let mut page = 1;
    loop {
        let result = query::execute(
            &catalog,
            &CatalogQuery {
                pagination: Pagination { page, per_page },
                ..CatalogQuery::default()
            },
        );
        rebuilt.extend(result.items);
        if page >= result.total_pages {
            break;
        }
        page += 1;
    }

    assert_eq!(names(&rebuilt), names(&all.items));
    assert_eq!(all.total_pages, 1);
    assert_eq!(all.total_matches, 7);
}

#[test]
fn default_page_size_is_fifty() {
    assert_eq!(query::DEFAULT_PAGE_SIZE, 50);
    let catalog = seed_catalog();
    let result = query::execute(&catalog, &CatalogQuery::default());
    // ceil(7 / 50) == 1
    assert_eq!(result.total_pages, 1);
}

#[test]
fn search_reaches_usage_notes() {
    let catalog = seed_catalog();
    let result = query::execute(
        &catalog,
        &CatalogQuery {
            search: Some("aromatherapy".to_string()),
            ..CatalogQuery::default()
        },
    );
    assert_eq!(names(&result.items), vec!["Lavender"]);
}
