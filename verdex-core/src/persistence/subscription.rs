use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::Result;
use crate::persistence::state::{StateStore, get_typed, set_typed};
use verdex_model::SubscriptionRecord;

const KEY: &str = "subscription_status";

/// The persisted subscription record, replaced whole on activation.
#[derive(Clone)]
pub struct SubscriptionRepository {
    store: Arc<dyn StateStore>,
}

impl std::fmt::Debug for SubscriptionRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionRepository")
            .finish_non_exhaustive()
    }
}

impl SubscriptionRepository {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    pub async fn current(&self) -> Result<Option<SubscriptionRecord>> {
        get_typed(self.store.as_ref(), KEY).await
    }

    /// The record if it has not yet expired.
    pub async fn active(&self, now: DateTime<Utc>) -> Result<Option<SubscriptionRecord>> {
        Ok(self.current().await?.filter(|r| r.is_active(now)))
    }

    pub async fn is_premium(&self, now: DateTime<Utc>) -> Result<bool> {
        Ok(self.active(now).await?.is_some())
    }

    pub async fn activate(&self, record: &SubscriptionRecord) -> Result<()> {
        set_typed(self.store.as_ref(), KEY, record).await?;
        info!(
            plan = %record.plan,
            order_id = %record.order_id,
            expires_at = %record.expires_at,
            "subscription activated"
        );
        Ok(())
    }

    pub async fn clear(&self) -> Result<()> {
        self.store.remove(KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::state::JsonStateStore;
    use verdex_model::PlanKind;

    #[tokio::test]
    async fn activation_persists_and_expires() {
        let dir = tempfile::tempdir().unwrap();
        let repo = SubscriptionRepository::new(Arc::new(JsonStateStore::in_dir(dir.path())));
        let now = Utc::now();
        let record = SubscriptionRecord {
            plan: PlanKind::Weekly,
            amount: 49,
            payment_id: "pay_1".into(),
            order_id: "order_1".into(),
            subscribed_at: now,
            expires_at: PlanKind::Weekly.expiry_from(now),
        };
        repo.activate(&record).await.unwrap();

        assert!(repo.is_premium(now).await.unwrap());
        let later = record.expires_at + chrono::Duration::seconds(1);
        assert!(!repo.is_premium(later).await.unwrap());
        assert_eq!(repo.current().await.unwrap(), Some(record));
    }
}
