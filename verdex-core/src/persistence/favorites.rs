use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::persistence::state::{StateStore, get_typed, set_typed};
use verdex_model::PlantId;

const KEY: &str = "favorites";

/// The favorites set, keyed by stable identifier and persisted whole after
/// every toggle.
#[derive(Clone)]
pub struct FavoritesRepository {
    store: Arc<dyn StateStore>,
}

impl std::fmt::Debug for FavoritesRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesRepository").finish_non_exhaustive()
    }
}

impl FavoritesRepository {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    pub async fn all(&self) -> Result<BTreeSet<PlantId>> {
        Ok(get_typed(self.store.as_ref(), KEY)
            .await?
            .unwrap_or_default())
    }

    pub async fn is_favorite(&self, id: PlantId) -> Result<bool> {
        Ok(self.all().await?.contains(&id))
    }

    /// Insert if absent, remove if present; returns whether the item is a
    /// favorite afterwards. Read-modify-write of the whole set.
    pub async fn toggle(&self, id: PlantId) -> Result<bool> {
        let mut set = self.all().await?;
        let now_favorite = if set.remove(&id) {
            false
        } else {
            set.insert(id);
            true
        };
        set_typed(self.store.as_ref(), KEY, &set).await?;
        debug!(%id, now_favorite, "favorite toggled");
        Ok(now_favorite)
    }
}
