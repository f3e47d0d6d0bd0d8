// Save profile command handler orchestrates the write flow.
//
// Responsibilities
// - Call the decider with the command.
// - Upsert the resulting profile through the ProfileStore port.

use crate::modules::profiles::core::ports::{ProfileStore, StoreError};
use crate::modules::profiles::core::profile::UserProfile;
use crate::modules::profiles::use_cases::save_profile::command::SaveProfile;
use crate::modules::profiles::use_cases::save_profile::decide::decide_save;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("domain rejected: {0}")]
    Domain(String),
}

pub struct SaveProfileHandler<TStore>
where
    TStore: ProfileStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SaveProfileHandler<TStore>
where
    TStore: ProfileStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SaveProfile) -> Result<UserProfile, ApplicationError> {
        let profile =
            decide_save(command).map_err(|error| ApplicationError::Domain(error.to_string()))?;
        self.store.upsert(profile.clone()).await?;
        Ok(profile)
    }
}
