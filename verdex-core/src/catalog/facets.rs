//! Distinct facet values offered as dropdown options on the browsing page.

use serde::{Deserialize, Serialize};
use verdex_contracts::plant_like::PlantLike;

/// Option lists for each filterable dimension, sorted and deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOptions {
    pub regions: Vec<String>,
    pub seasons: Vec<String>,
    pub plant_types: Vec<String>,
    pub benefits: Vec<String>,
}

fn whole(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = values.filter(|v| !v.is_empty()).collect();
    out.sort_unstable();
    out.dedup();
    out
}

fn split_tags<'a>(field: &'a str) -> impl Iterator<Item = String> + 'a {
    field
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
}

impl FacetOptions {
    /// Region and plant type are offered whole; season and benefit fields
    /// are comma-lists and contribute each tag separately.
    pub fn collect<P: PlantLike>(items: &[P]) -> Self {
        Self {
            regions: whole(items.iter().map(|p| p.region().to_string())),
            seasons: whole(items.iter().flat_map(|p| split_tags(p.season()))),
            plant_types: whole(items.iter().map(|p| p.plant_type().to_string())),
            benefits: whole(items.iter().flat_map(|p| split_tags(p.health_benefits()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_catalog;

    #[test]
    fn seasons_are_split_and_deduplicated() {
        let options = FacetOptions::collect(&seed_catalog());
        assert_eq!(
            options.seasons,
            vec!["Monsoon", "Spring", "Summer", "Year-round"]
        );
    }

    #[test]
    fn regions_are_kept_whole() {
        let options = FacetOptions::collect(&seed_catalog());
        assert!(options
            .regions
            .contains(&"India, Southeast Asia".to_string()));
        assert!(!options.regions.contains(&"India".to_string()));
    }

    #[test]
    fn empty_catalog_yields_empty_options() {
        let options = FacetOptions::collect::<verdex_model::PlantRecord>(&[]);
        assert_eq!(options, FacetOptions::default());
    }
}
