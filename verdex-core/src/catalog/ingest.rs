//! Ingestion boundary: every record entering the catalog passes through
//! here exactly once, so downstream code never re-validates field shapes.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{CoreError, Result};
use verdex_model::PlantRecord;

/// Trim a free-text field, mapping blank to absent.
fn clean(field: Option<String>) -> Option<String> {
    field.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Normalize one record: trimmed fields, blank-to-None.
pub fn normalize_record(record: PlantRecord) -> Result<PlantRecord> {
    Ok(PlantRecord {
        id: record.id,
        common_name: clean(record.common_name),
        scientific_name: clean(record.scientific_name),
        region: clean(record.region),
        season: clean(record.season),
        plant_type: clean(record.plant_type),
        health_benefits: clean(record.health_benefits),
        description: clean(record.description),
        uses: clean(record.uses),
        image: clean(record.image),
        images: record
            .images
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        detail: record.detail.filter(|d| !d.is_empty()),
    })
}

/// Normalize a whole catalog and enforce identifier uniqueness.
pub fn normalize(items: Vec<PlantRecord>) -> Result<Vec<PlantRecord>> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id) {
            return Err(CoreError::Invalid(format!(
                "duplicate identifier: {}",
                item.id
            )));
        }
        out.push(normalize_record(item)?);
    }
    Ok(out)
}

/// Parse a JSON catalog document (the `GET /plants` wire shape).
pub fn from_json_slice(bytes: &[u8]) -> Result<Vec<PlantRecord>> {
    let items: Vec<PlantRecord> = serde_json::from_slice(bytes)?;
    normalize(items)
}

/// Load and validate a catalog file from disk.
pub async fn load_from_file(path: &Path) -> Result<Vec<PlantRecord>> {
    let bytes = tokio::fs::read(path).await?;
    from_json_slice(&bytes)
}
