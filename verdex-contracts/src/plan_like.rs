use verdex_model::plan::{BillingPlan, PlanKind};

/// Read surface the checkout flow needs from any plan-shaped value.
pub trait PlanLike {
    fn kind(&self) -> PlanKind;

    fn price(&self) -> u32;

    fn original_price(&self) -> u32;

    /// Amount carried to the payment collaborator, in minor units.
    fn amount_minor_units(&self) -> u64 {
        u64::from(self.price()) * 100
    }

    fn savings(&self) -> u32 {
        self.original_price().saturating_sub(self.price())
    }
}

impl PlanLike for BillingPlan {
    fn kind(&self) -> PlanKind {
        self.kind
    }

    fn price(&self) -> u32 {
        self.price
    }

    fn original_price(&self) -> u32 {
        self.original_price
    }
}
