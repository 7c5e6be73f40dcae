use serde::{Deserialize, Serialize};
use verdex_model::filter_types::{Facet, SortKey};

/// Page size of the browsing grid.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// One optional constraint per facet. Empty/absent means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefit: Option<String>,
}

fn trimmed(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

impl FacetFilters {
    /// The active constraint for one facet, trimmed, blank treated as none.
    pub fn get(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Region => trimmed(&self.region),
            Facet::Season => trimmed(&self.season),
            Facet::PlantType => trimmed(&self.plant_type),
            Facet::Benefit => trimmed(&self.benefit),
        }
    }

    pub fn is_empty(&self) -> bool {
        Facet::all().iter().all(|&f| self.get(f).is_none())
    }

    /// The "clear filters" action.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Requested slice of the ordered result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Full browsing query: free text, facets, sort key, page request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default)]
    pub filters: FacetFilters,
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub pagination: Pagination,
}

impl CatalogQuery {
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// One page of results plus the bookkeeping the view renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    /// Effective page after clamping, 1-based.
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}
