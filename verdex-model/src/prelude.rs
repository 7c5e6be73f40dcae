//! Frequently used model types, importable in one line.

pub use crate::detail::{AyurvedicProperties, DetailContent, GrowingStep, MedicinalUse};
pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::filter_types::{Facet, SortKey};
pub use crate::ids::PlantId;
pub use crate::plan::{BillingPlan, PlanKind};
pub use crate::plant::PlantRecord;
pub use crate::site::{ContactInfo, ContactSection, PriceTier, PricingTable, SiteSettings};
pub use crate::subscription::SubscriptionRecord;
