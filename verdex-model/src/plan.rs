use chrono::{DateTime, Days, Months, Utc};
use std::fmt;

/// Billing cadence of a subscription plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlanKind {
    Weekly,
    Monthly,
    Yearly,
}

impl PlanKind {
    pub fn all() -> &'static [PlanKind] {
        use PlanKind::*;
        &[Weekly, Monthly, Yearly]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanKind::Weekly => "Weekly",
            PlanKind::Monthly => "Monthly",
            PlanKind::Yearly => "Yearly",
        }
    }

    /// Period label shown next to the price, e.g. "₹149/month".
    pub fn period(&self) -> &'static str {
        match self {
            PlanKind::Weekly => "week",
            PlanKind::Monthly => "month",
            PlanKind::Yearly => "year",
        }
    }

    pub fn billed_as(&self) -> &'static str {
        match self {
            PlanKind::Weekly => "Billed weekly",
            PlanKind::Monthly => "Billed monthly",
            PlanKind::Yearly => "Billed yearly",
        }
    }

    /// Fixed calendar arithmetic for the expiry (and next billing) date.
    ///
    /// Weekly is an exact seven days. Monthly and yearly land on the same
    /// calendar day of the target month, clamped at month ends (Jan 31 +
    /// one month expires Feb 28/29).
    pub fn expiry_from(&self, start: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            PlanKind::Weekly => start
                .checked_add_days(Days::new(7))
                .unwrap_or(start),
            PlanKind::Monthly => start
                .checked_add_months(Months::new(1))
                .unwrap_or(start),
            PlanKind::Yearly => start
                .checked_add_months(Months::new(12))
                .unwrap_or(start),
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for PlanKind {
    type Err = crate::error::ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Ok(PlanKind::Weekly),
            "monthly" => Ok(PlanKind::Monthly),
            "yearly" => Ok(PlanKind::Yearly),
            other => Err(crate::error::ModelError::InvalidRecord(format!(
                "unknown plan kind: {other}"
            ))),
        }
    }
}

/// One immutable subscription offer as presented on the plans page.
///
/// Prices are whole rupees; the payment collaborator receives minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BillingPlan {
    pub kind: PlanKind,
    pub price: u32,
    pub original_price: u32,
    pub discount_percent: u8,
    pub popular: bool,
}
