//! Trait surfaces that describe interactions with Verdex data models.

pub mod plan_like;
pub mod plant_like;

/// Frequently used trait combinators for the query and checkout crates.
pub mod prelude {
    pub use super::plan_like::PlanLike;
    pub use super::plant_like::PlantLike;
}
