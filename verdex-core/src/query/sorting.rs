//! Stable, case-insensitive ordering of the filtered list.

use verdex_contracts::plant_like::PlantLike;
use verdex_model::filter_types::SortKey;

fn key_of<P: PlantLike>(item: &P, key: SortKey) -> &str {
    match key {
        SortKey::CommonName => item.common_name(),
        SortKey::Scientific => item.scientific_name(),
        SortKey::Region => item.region(),
    }
}

/// Sort ascending on the selected key. Ties keep their original relative
/// order; missing keys read as the empty string and sort first.
pub fn sort_items<P: PlantLike>(items: &mut [&P], key: SortKey) {
    items.sort_by(|a, b| {
        key_of(*a, key)
            .to_lowercase()
            .cmp(&key_of(*b, key).to_lowercase())
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdex_model::{PlantId, PlantRecord};

    fn plant(name: Option<&str>, scientific: Option<&str>) -> PlantRecord {
        PlantRecord {
            id: PlantId::new(),
            common_name: name.map(str::to_string),
            scientific_name: scientific.map(str::to_string),
            ..PlantRecord::empty()
        }
    }

    #[test]
    fn sorts_case_insensitively() {
        let a = plant(Some("aloe vera"), None);
        let b = plant(Some("Lavender"), None);
        let c = plant(Some("TULSI"), None);
        let mut refs: Vec<&PlantRecord> = vec![&c, &b, &a];
        sort_items(&mut refs, SortKey::CommonName);
        let names: Vec<_> = refs.iter().map(|p| p.common_name()).collect();
        assert_eq!(names, vec!["aloe vera", "Lavender", "TULSI"]);
    }

    #[test]
    fn missing_keys_sort_first() {
        let named = plant(Some("Tulsi"), None);
        let unnamed = plant(None, None);
        let mut refs: Vec<&PlantRecord> = vec![&named, &unnamed];
        sort_items(&mut refs, SortKey::CommonName);
        assert_eq!(refs[0].common_name(), "");
    }

    #[test]
    fn equal_keys_keep_original_order() {
        let first = plant(Some("Herb"), Some("Alpha"));
        let second = plant(Some("Herb"), Some("Beta"));
        let mut refs: Vec<&PlantRecord> = vec![&first, &second];
        sort_items(&mut refs, SortKey::CommonName);
        assert_eq!(refs[0].scientific_name(), "Alpha");
        assert_eq!(refs[1].scientific_name(), "Beta");
    }
}
