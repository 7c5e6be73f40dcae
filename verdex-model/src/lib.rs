//! Core data model definitions shared across Verdex crates.
#![allow(missing_docs)]

pub mod detail;
pub mod error;
pub mod filter_types;
pub mod ids;
pub mod plan;
pub mod plant;
pub mod prelude;
pub mod site;
pub mod subscription;

// Intentionally curated re-exports for downstream consumers.
pub use detail::{AyurvedicProperties, DetailContent, GrowingStep, MedicinalUse};
pub use error::{ModelError, Result as ModelResult};
pub use filter_types::{Facet, SortKey};
pub use ids::PlantId;
pub use plan::{BillingPlan, PlanKind};
pub use plant::PlantRecord;
pub use site::{ContactInfo, ContactSection, PriceTier, PricingTable, SiteSettings};
pub use subscription::SubscriptionRecord;
