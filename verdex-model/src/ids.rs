use uuid::Uuid;

/// Namespace for deterministic seed-catalog identifiers.
const PLANT_NAMESPACE: Uuid = Uuid::from_bytes([
    0x6b, 0x1f, 0x40, 0x9a, 0x2c, 0x55, 0x4d, 0x8e, 0x9f, 0x3a, 0x71, 0xd4,
    0x0b, 0x6e, 0x52, 0xc7,
]);

/// Strongly typed identifier for catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlantId(pub Uuid);

impl Default for PlantId {
    fn default() -> Self {
        Self::new()
    }
}

impl PlantId {
    pub fn new() -> Self {
        PlantId(Uuid::now_v7())
    }

    /// Deterministic id derived from a seed entry's common name, so the
    /// built-in catalog keeps stable identifiers across restarts.
    pub fn from_seed_name(name: &str) -> Self {
        PlantId(Uuid::new_v5(&PLANT_NAMESPACE, name.as_bytes()))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for PlantId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for PlantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PlantId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(PlantId)
    }
}
