use crate::plan::PlanKind;
use chrono::{DateTime, Utc};

/// Persisted record of a settled subscription purchase.
///
/// Written whole to the durable local store on checkout success; replaced
/// whole on renewal. `expires_at` doubles as the next-billing date.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubscriptionRecord {
    pub plan: PlanKind,
    /// Amount paid, whole rupees.
    pub amount: u32,
    pub payment_id: String,
    pub order_id: String,
    pub subscribed_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SubscriptionRecord {
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}
