use verdex_model::filter_types::Facet;
use verdex_model::ids::PlantId;
use verdex_model::plant::PlantRecord;

// A trait that lets the query pipeline treat any catalog-item shape the
// same way, with missing fields reading as the empty string.
pub trait PlantLike {
    fn id(&self) -> PlantId;

    fn common_name(&self) -> &str;

    fn scientific_name(&self) -> &str;

    fn region(&self) -> &str;

    fn season(&self) -> &str;

    fn plant_type(&self) -> &str;

    fn health_benefits(&self) -> &str;

    fn description(&self) -> &str;

    fn uses(&self) -> &str;

    /// The field a facet constraint applies to.
    fn facet_field(&self, facet: Facet) -> &str {
        match facet {
            Facet::Region => self.region(),
            Facet::Season => self.season(),
            Facet::PlantType => self.plant_type(),
            Facet::Benefit => self.health_benefits(),
        }
    }

    /// Every field the free-text search scans, in display order.
    fn search_fields(&self) -> [&str; 8] {
        [
            self.common_name(),
            self.scientific_name(),
            self.region(),
            self.season(),
            self.plant_type(),
            self.health_benefits(),
            self.description(),
            self.uses(),
        ]
    }
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or_default()
}

impl PlantLike for PlantRecord {
    fn id(&self) -> PlantId {
        self.id
    }

    fn common_name(&self) -> &str {
        text(&self.common_name)
    }

    fn scientific_name(&self) -> &str {
        text(&self.scientific_name)
    }

    fn region(&self) -> &str {
        text(&self.region)
    }

    fn season(&self) -> &str {
        text(&self.season)
    }

    fn plant_type(&self) -> &str {
        text(&self.plant_type)
    }

    fn health_benefits(&self) -> &str {
        text(&self.health_benefits)
    }

    fn description(&self) -> &str {
        text(&self.description)
    }

    fn uses(&self) -> &str {
        text(&self.uses)
    }
}
