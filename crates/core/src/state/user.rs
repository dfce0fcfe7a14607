//! Profile and settings containers: fetch-once state with optimistic
//! updates.
//!
//! `update` is an explicit snapshot/apply/commit-or-revert transaction:
//! the patch is applied to local state immediately, the server update is
//! issued, and a failure restores the pre-update snapshot and surfaces the
//! error. It never retries.

use std::sync::Arc;

use crate::api::UserGateway;
use crate::errors::ClientError;
use crate::models::user::{UserProfile, UserProfilePatch, UserSettings, UserSettingsPatch};

use super::resource::{Resource, ResourceSnapshot};

/// State container for `GET/PUT /api/user/settings`.
pub struct SettingsStore {
    gateway: Arc<dyn UserGateway>,
    resource: Resource<UserSettings>,
}

impl SettingsStore {
    #[must_use]
    pub fn new(gateway: Arc<dyn UserGateway>) -> Self {
        Self {
            gateway,
            resource: Resource::new(),
        }
    }

    /// Construct and run the initial fetch (the on-mount load).
    pub async fn new_loaded(gateway: Arc<dyn UserGateway>) -> Self {
        let store = Self::new(gateway);
        store.refetch().await;
        store
    }

    #[must_use]
    pub fn snapshot(&self) -> ResourceSnapshot<UserSettings> {
        self.resource.snapshot()
    }

    #[must_use]
    pub fn settings(&self) -> Option<UserSettings> {
        self.resource.data()
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.resource.loading()
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.resource.error()
    }

    /// Fetch from the server; a completion from a superseded refetch is
    /// dropped.
    pub async fn refetch(&self) {
        let token = self.resource.begin_load();
        let result = self.gateway.fetch_settings().await;
        self.resource.complete(token, result);
    }

    /// Optimistic update. On failure the container's state is exactly the
    /// pre-update snapshot plus an error string.
    pub async fn update(&self, patch: UserSettingsPatch) -> Result<UserSettings, ClientError> {
        self.resource.clear_error();
        let previous = self.resource.data();

        if let Some(mut current) = previous.clone() {
            current.apply(&patch);
            self.resource.set_data(Some(current));
        }

        match self.gateway.push_settings(&patch).await {
            Ok(server) => {
                self.resource.set_data(Some(server.clone()));
                Ok(server)
            }
            Err(e) => {
                self.resource.set_data(previous);
                self.resource.set_error(e.to_string());
                Err(e)
            }
        }
    }
}

/// State container for `GET/PUT /api/user/profile`. Same discipline as
/// [`SettingsStore`].
pub struct ProfileStore {
    gateway: Arc<dyn UserGateway>,
    resource: Resource<UserProfile>,
}

impl ProfileStore {
    #[must_use]
    pub fn new(gateway: Arc<dyn UserGateway>) -> Self {
        Self {
            gateway,
            resource: Resource::new(),
        }
    }

    pub async fn new_loaded(gateway: Arc<dyn UserGateway>) -> Self {
        let store = Self::new(gateway);
        store.refetch().await;
        store
    }

    #[must_use]
    pub fn snapshot(&self) -> ResourceSnapshot<UserProfile> {
        self.resource.snapshot()
    }

    #[must_use]
    pub fn profile(&self) -> Option<UserProfile> {
        self.resource.data()
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.resource.loading()
    }

    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.resource.error()
    }

    pub async fn refetch(&self) {
        let token = self.resource.begin_load();
        let result = self.gateway.fetch_profile().await;
        self.resource.complete(token, result);
    }

    pub async fn update(&self, patch: UserProfilePatch) -> Result<UserProfile, ClientError> {
        self.resource.clear_error();
        let previous = self.resource.data();

        if let Some(mut current) = previous.clone() {
            current.apply(&patch);
            self.resource.set_data(Some(current));
        }

        match self.gateway.push_profile(&patch).await {
            Ok(server) => {
                self.resource.set_data(Some(server.clone()));
                Ok(server)
            }
            Err(e) => {
                self.resource.set_data(previous);
                self.resource.set_error(e.to_string());
                Err(e)
            }
        }
    }
}
