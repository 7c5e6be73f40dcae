//! Admin-editable site content: contact info, pricing tiers, settings.
//!
//! Each document is read and replaced whole; there is no partial update.

use crate::plan::{BillingPlan, PlanKind};

/// One block on the contact page (location, phone, email, hours).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactSection {
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub details: Vec<String>,
}

impl ContactSection {
    fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            details: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactInfo {
    pub location: ContactSection,
    pub phone: ContactSection,
    pub email: ContactSection,
    pub hours: ContactSection,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            location: ContactSection::titled("Our Location"),
            phone: ContactSection::titled("Phone Numbers"),
            email: ContactSection::titled("Email Addresses"),
            hours: ContactSection::titled("Business Hours"),
        }
    }
}

/// Admin-editable price point for one billing cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceTier {
    pub price: u32,
    pub original_price: u32,
    pub discount: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingTable {
    pub weekly: PriceTier,
    pub monthly: PriceTier,
    pub yearly: PriceTier,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            weekly: PriceTier {
                price: 49,
                original_price: 69,
                discount: 30,
            },
            monthly: PriceTier {
                price: 149,
                original_price: 299,
                discount: 50,
            },
            yearly: PriceTier {
                price: 1499,
                original_price: 8999,
                discount: 83,
            },
        }
    }
}

impl PricingTable {
    pub fn tier(&self, kind: PlanKind) -> PriceTier {
        match kind {
            PlanKind::Weekly => self.weekly,
            PlanKind::Monthly => self.monthly,
            PlanKind::Yearly => self.yearly,
        }
    }

    /// Materialize the offer list shown on the plans page. Monthly carries
    /// the "popular" badge.
    pub fn plans(&self) -> Vec<BillingPlan> {
        PlanKind::all()
            .iter()
            .map(|&kind| {
                let tier = self.tier(kind);
                BillingPlan {
                    kind,
                    price: tier.price,
                    original_price: tier.original_price,
                    discount_percent: tier.discount,
                    popular: kind == PlanKind::Monthly,
                }
            })
            .collect()
    }
}

/// Global site settings managed from the admin screen.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiteSettings {
    pub site_title: String,
    pub meta_description: String,
    pub admin_email: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub maintenance_mode: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_title: "Verdex".to_string(),
            meta_description: "Your complete guide to medicinal plants and herbal remedies"
                .to_string(),
            admin_email: "admin@verdex.in".to_string(),
            maintenance_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pricing_matches_plans_page() {
        let plans = PricingTable::default().plans();
        assert_eq!(plans.len(), 3);
        let yearly = plans.iter().find(|p| p.kind == PlanKind::Yearly).unwrap();
        assert_eq!(yearly.price, 1499);
        assert_eq!(yearly.original_price, 8999);
        let monthly = plans.iter().find(|p| p.kind == PlanKind::Monthly).unwrap();
        assert!(monthly.popular);
    }
}
