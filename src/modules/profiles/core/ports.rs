// Ports define what the profiles module needs from the outside world,
// without implementing it.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the
//   adapters layer.
//
// Testing guidance
// - Provide in memory implementations for tests and local development.

use crate::modules::profiles::core::profile::UserProfile;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn upsert(&self, profile: UserProfile) -> Result<(), StoreError>;
    async fn get(&self, user_id: &str) -> Result<Option<UserProfile>, StoreError>;
}

#[async_trait]
pub trait ProfileQueries: Send + Sync {
    async fn by_user_id(&self, user_id: &str) -> anyhow::Result<Option<UserProfile>>;
}
