use crate::detail::DetailContent;
use crate::ids::PlantId;

/// One catalog entry.
///
/// Only the identifier is required. Every other field may be absent, and
/// downstream consumers (predicate, sort, rendering) treat a missing field
/// as the empty string rather than erroring.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlantRecord {
    pub id: PlantId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub common_name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scientific_name: Option<String>,
    /// Free text or comma-separated region tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub region: Option<String>,
    /// Comma-separated season tags, e.g. "Spring, Summer, Monsoon".
    #[cfg_attr(feature = "serde", serde(default))]
    pub season: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub plant_type: Option<String>,
    /// Comma-separated health-benefit tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub health_benefits: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub uses: Option<String>,
    /// Primary image reference (a URL path under the site's asset root).
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: Option<String>,
    /// Additional gallery images uploaded through the admin screen.
    #[cfg_attr(feature = "serde", serde(default))]
    pub images: Vec<String>,
    /// Tabbed detail-page content; absent for minimally-described entries.
    #[cfg_attr(feature = "serde", serde(default))]
    pub detail: Option<DetailContent>,
}

impl PlantRecord {
    /// A record with nothing but a fresh identifier, used as the admin
    /// screen's blank editing template.
    pub fn empty() -> Self {
        Self {
            id: PlantId::new(),
            common_name: None,
            scientific_name: None,
            region: None,
            season: None,
            plant_type: None,
            health_benefits: None,
            description: None,
            uses: None,
            image: None,
            images: Vec::new(),
            detail: None,
        }
    }
}
