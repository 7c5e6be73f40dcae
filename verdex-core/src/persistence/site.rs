use std::sync::Arc;

use tracing::info;

use crate::error::Result;
use crate::persistence::state::{StateStore, get_typed, set_typed};
use crate::validate::{self, FieldError, ValidationError};
use verdex_model::{ContactInfo, PricingTable, SiteSettings};

const CONTACT_KEY: &str = "contact_info";
const PRICING_KEY: &str = "pricing";
const SETTINGS_KEY: &str = "site_settings";

/// Admin-editable site documents, each read and replaced whole.
#[derive(Clone)]
pub struct SiteRepository {
    store: Arc<dyn StateStore>,
}

impl std::fmt::Debug for SiteRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteRepository").finish_non_exhaustive()
    }
}

impl SiteRepository {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    pub async fn contact(&self) -> Result<ContactInfo> {
        Ok(get_typed(self.store.as_ref(), CONTACT_KEY)
            .await?
            .unwrap_or_default())
    }

    pub async fn set_contact(&self, contact: &ContactInfo) -> Result<()> {
        set_typed(self.store.as_ref(), CONTACT_KEY, contact).await?;
        info!("contact info updated");
        Ok(())
    }

    pub async fn pricing(&self) -> Result<PricingTable> {
        Ok(get_typed(self.store.as_ref(), PRICING_KEY)
            .await?
            .unwrap_or_default())
    }

    pub async fn set_pricing(&self, pricing: &PricingTable) -> Result<()> {
        validate_pricing(pricing)?;
        set_typed(self.store.as_ref(), PRICING_KEY, pricing).await?;
        info!("pricing table updated");
        Ok(())
    }

    pub async fn settings(&self) -> Result<SiteSettings> {
        Ok(get_typed(self.store.as_ref(), SETTINGS_KEY)
            .await?
            .unwrap_or_default())
    }

    pub async fn set_settings(&self, settings: &SiteSettings) -> Result<()> {
        validate_settings(settings)?;
        set_typed(self.store.as_ref(), SETTINGS_KEY, settings).await?;
        info!(maintenance = settings.maintenance_mode, "site settings updated");
        Ok(())
    }
}

fn validate_pricing(pricing: &PricingTable) -> std::result::Result<(), ValidationError> {
    let mut fields = Vec::new();
    for (name, tier) in [
        ("weekly", pricing.weekly),
        ("monthly", pricing.monthly),
        ("yearly", pricing.yearly),
    ] {
        if tier.price == 0 {
            fields.push(FieldError {
                field: name,
                message: "price must be positive".to_string(),
            });
        } else if tier.original_price < tier.price {
            fields.push(FieldError {
                field: name,
                message: "original price cannot be below the offer price".to_string(),
            });
        }
    }
    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { fields })
    }
}

fn validate_settings(settings: &SiteSettings) -> std::result::Result<(), ValidationError> {
    let email = settings.admin_email.trim();
    if !email.is_empty() && !validate::is_valid_email(email) {
        return Err(ValidationError {
            fields: vec![FieldError {
                field: "admin_email",
                message: "Please enter a valid email address.".to_string(),
            }],
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::persistence::state::JsonStateStore;
    use verdex_model::PriceTier;

    fn repo(dir: &std::path::Path) -> SiteRepository {
        SiteRepository::new(Arc::new(JsonStateStore::in_dir(dir)))
    }

    #[tokio::test]
    async fn documents_default_until_written() {
        let dir = tempfile::tempdir().unwrap();
        let site = repo(dir.path());
        assert_eq!(site.contact().await.unwrap(), ContactInfo::default());
        assert_eq!(site.pricing().await.unwrap(), PricingTable::default());
        assert!(!site.settings().await.unwrap().maintenance_mode);
    }

    #[tokio::test]
    async fn pricing_update_replaces_the_whole_table() {
        let dir = tempfile::tempdir().unwrap();
        let site = repo(dir.path());
        let mut pricing = PricingTable::default();
        pricing.monthly = PriceTier {
            price: 199,
            original_price: 399,
            discount: 50,
        };
        site.set_pricing(&pricing).await.unwrap();
        assert_eq!(site.pricing().await.unwrap(), pricing);
    }

    #[tokio::test]
    async fn inverted_prices_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let site = repo(dir.path());
        let mut pricing = PricingTable::default();
        pricing.yearly = PriceTier {
            price: 1499,
            original_price: 99,
            discount: 0,
        };
        let err = site.set_pricing(&pricing).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn maintenance_toggle_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let site = repo(dir.path());
        let mut settings = SiteSettings::default();
        settings.maintenance_mode = true;
        site.set_settings(&settings).await.unwrap();
        assert!(site.settings().await.unwrap().maintenance_mode);
    }
}
