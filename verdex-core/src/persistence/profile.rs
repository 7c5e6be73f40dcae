use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::persistence::state::{StateStore, get_typed, set_typed};
use crate::validate;

const KEY: &str = "profile";

/// Cached visitor profile used to prefill the checkout form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Clone)]
pub struct ProfileRepository {
    store: Arc<dyn StateStore>,
}

impl std::fmt::Debug for ProfileRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileRepository").finish_non_exhaustive()
    }
}

impl ProfileRepository {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self) -> Result<Profile> {
        Ok(get_typed(self.store.as_ref(), KEY)
            .await?
            .unwrap_or_default())
    }

    /// Validates field shapes before anything touches storage.
    pub async fn set(&self, profile: &Profile) -> Result<()> {
        validate::validate_profile(profile)?;
        set_typed(self.store.as_ref(), KEY, profile).await
    }
}
