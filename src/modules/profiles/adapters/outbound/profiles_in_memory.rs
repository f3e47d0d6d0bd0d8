// In memory implementation of the profile ports.
//
// Purpose
// - Support tests and local development without a database.
//
// Responsibilities
// - Store one profile per user in a map.

use crate::modules::profiles::core::ports::{ProfileQueries, ProfileStore, StoreError};
use crate::modules::profiles::core::profile::UserProfile;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProfiles {
    rows: RwLock<HashMap<String, UserProfile>>,
    is_offline: bool,
}

impl InMemoryProfiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl ProfileStore for InMemoryProfiles {
    async fn upsert(&self, profile: UserProfile) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Profile store offline".into()));
        }
        let mut guard = self.rows.write().await;
        guard.insert(profile.user_id.clone(), profile);
        Ok(())
    }

    async fn get(&self, user_id: &str) -> Result<Option<UserProfile>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Profile store offline".into()));
        }
        Ok(self.rows.read().await.get(user_id).cloned())
    }
}

#[async_trait::async_trait]
impl ProfileQueries for InMemoryProfiles {
    async fn by_user_id(&self, user_id: &str) -> anyhow::Result<Option<UserProfile>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Profile store offline"));
        }
        Ok(self.rows.read().await.get(user_id).cloned())
    }
}
