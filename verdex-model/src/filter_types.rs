use std::fmt;

/// Sort keys offered by the browsing page. Ascending only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortKey {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "name"))]
    CommonName,
    Scientific,
    Region,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        use SortKey::*;
        &[CommonName, Scientific, Region]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::CommonName => "Common Name (A-Z)",
            SortKey::Scientific => "Scientific Name (A-Z)",
            SortKey::Region => "Region (A-Z)",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One filterable dimension of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Facet {
    Region,
    Season,
    PlantType,
    Benefit,
}

impl Facet {
    pub fn all() -> &'static [Facet] {
        use Facet::*;
        &[Region, Season, PlantType, Benefit]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Facet::Region => "Region",
            Facet::Season => "Season",
            Facet::PlantType => "Plant Type",
            Facet::Benefit => "Health Benefit",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
