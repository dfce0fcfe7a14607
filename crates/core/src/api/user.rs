//! Profile, settings, security and account endpoints.

use crate::errors::ClientError;
use crate::models::auth::{ChangePasswordRequest, TwoFactorSetupRequest};
use crate::models::user::{
    TwoFactorSetupResponse, UserProfile, UserProfilePatch, UserSettings, UserSettingsPatch,
};
use crate::models::MessageResponse;

use super::ApiClient;

impl ApiClient {
    pub async fn user_profile(&self) -> Result<UserProfile, ClientError> {
        self.get("/api/user/profile").await
    }

    pub async fn update_user_profile(
        &self,
        patch: &UserProfilePatch,
    ) -> Result<UserProfile, ClientError> {
        self.put("/api/user/profile", patch).await
    }

    pub async fn user_settings(&self) -> Result<UserSettings, ClientError> {
        self.get("/api/user/settings").await
    }

    pub async fn update_user_settings(
        &self,
        patch: &UserSettingsPatch,
    ) -> Result<UserSettings, ClientError> {
        self.put("/api/user/settings", patch).await
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ClientError> {
        self.post(
            "/api/user/change-password",
            &ChangePasswordRequest {
                current_password: current_password.to_string(),
                new_password: new_password.to_string(),
            },
        )
        .await
    }

    /// Enable or disable two-factor auth; the current password re-confirms
    /// the user either way.
    pub async fn setup_two_factor(
        &self,
        enable: bool,
        password: &str,
    ) -> Result<TwoFactorSetupResponse, ClientError> {
        self.post(
            "/api/user/2fa/setup",
            &TwoFactorSetupRequest {
                enable,
                password: password.to_string(),
            },
        )
        .await
    }

    pub async fn delete_account(&self) -> Result<MessageResponse, ClientError> {
        self.delete("/api/user").await
    }
}
