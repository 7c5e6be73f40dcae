use std::{collections::HashMap, fmt, sync::Arc};

use chrono::{Duration, Utc};
use tokio::sync::Mutex;
use tracing::info;

use verdex_config::Config;
use verdex_core::{
    CatalogStore, CheckoutSession, FavoritesRepository, HmacPaymentVerifier, JsonStateStore,
    PaymentVerifier, ProfileRepository, SiteRepository, StateStore, SubscriptionRepository,
    catalog::{ingest, seed},
};

/// Abandoned checkout sessions are dropped after this long.
const CHECKOUT_RETENTION_HOURS: i64 = 24;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub favorites: FavoritesRepository,
    pub subscriptions: SubscriptionRepository,
    pub profiles: ProfileRepository,
    pub site: SiteRepository,
    /// Open checkout attempts keyed by their current correlation id.
    pub checkouts: Arc<Mutex<HashMap<String, CheckoutSession>>>,
    pub verifier: Arc<dyn PaymentVerifier>,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    /// Build the shared state: durable store, catalog (seed file or the
    /// built-in set), repositories, and the payment verifier.
    pub async fn initialize(config: Arc<Config>) -> anyhow::Result<Self> {
        let store: Arc<dyn StateStore> = Arc::new(JsonStateStore::in_dir(&config.data_dir));

        let items = match &config.seed_file {
            Some(path) => {
                let items = ingest::load_from_file(path).await?;
                info!(path = %path.display(), count = items.len(), "catalog loaded from file");
                items
            }
            None => seed::seed_catalog(),
        };
        let catalog = Arc::new(CatalogStore::new(items)?);

        let verifier = build_verifier(&config);

        Ok(Self {
            catalog,
            favorites: FavoritesRepository::new(store.clone()),
            subscriptions: SubscriptionRepository::new(store.clone()),
            profiles: ProfileRepository::new(store.clone()),
            site: SiteRepository::new(store),
            checkouts: Arc::new(Mutex::new(HashMap::new())),
            verifier,
            config,
        })
    }

    /// Expire stale in-flight attempts and drop long-abandoned sessions.
    pub async fn sweep_checkouts(&self) {
        let now = Utc::now();
        let mut checkouts = self.checkouts.lock().await;
        for session in checkouts.values_mut() {
            session.expire_if_due(now);
        }
        let initial = checkouts.len();
        checkouts
            .retain(|_, s| now - s.created_at < Duration::hours(CHECKOUT_RETENTION_HOURS));
        let dropped = initial - checkouts.len();
        if dropped > 0 {
            info!(dropped, "abandoned checkout sessions dropped");
        }
    }
}

#[cfg(feature = "demo")]
fn build_verifier(config: &Config) -> Arc<dyn PaymentVerifier> {
    if config.dev_mode {
        tracing::warn!("demo payment verifier active: signatures are NOT checked");
        return Arc::new(verdex_core::checkout::demo::DemoPaymentVerifier);
    }
    Arc::new(HmacPaymentVerifier::new(config.payment.secret.clone()))
}

#[cfg(not(feature = "demo"))]
fn build_verifier(config: &Config) -> Arc<dyn PaymentVerifier> {
    Arc::new(HmacPaymentVerifier::new(config.payment.secret.clone()))
}
