use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// User profile: `GET/PUT /api/user/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
}

/// Partial profile update. Unset fields are omitted from the request body
/// and left untouched server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// User settings: `GET/PUT /api/user/settings`.
///
/// The wire uses camelCase for the advisory fields and snake_case for the
/// rest, matching the backend response model field-for-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub timezone: Option<String>,
    pub language: Option<String>,
    pub currency: Option<String>,
    #[serde(rename = "riskProfile")]
    pub risk_profile: Option<String>,
    #[serde(rename = "investmentHorizon")]
    pub investment_horizon: Option<String>,
    pub notifications: Option<HashMap<String, bool>>,
    pub two_factor_enabled: bool,
}

/// Partial settings update. `two_factor_enabled` is deliberately absent:
/// it only changes through the dedicated 2FA setup endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserSettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(rename = "riskProfile", skip_serializing_if = "Option::is_none")]
    pub risk_profile: Option<String>,
    #[serde(rename = "investmentHorizon", skip_serializing_if = "Option::is_none")]
    pub investment_horizon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<HashMap<String, bool>>,
}

impl UserProfile {
    /// Apply a patch locally (the optimistic half of update-then-revert).
    pub fn apply(&mut self, patch: &UserProfilePatch) {
        if let Some(name) = &patch.name {
            self.name = Some(name.clone());
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
    }
}

impl UserSettings {
    /// Apply a patch locally (the optimistic half of update-then-revert).
    pub fn apply(&mut self, patch: &UserSettingsPatch) {
        if let Some(timezone) = &patch.timezone {
            self.timezone = Some(timezone.clone());
        }
        if let Some(language) = &patch.language {
            self.language = Some(language.clone());
        }
        if let Some(currency) = &patch.currency {
            self.currency = Some(currency.clone());
        }
        if let Some(risk_profile) = &patch.risk_profile {
            self.risk_profile = Some(risk_profile.clone());
        }
        if let Some(horizon) = &patch.investment_horizon {
            self.investment_horizon = Some(horizon.clone());
        }
        if let Some(notifications) = &patch.notifications {
            self.notifications = Some(notifications.clone());
        }
    }
}

/// Result of the 2FA setup endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TwoFactorSetupResponse {
    pub message: String,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub two_factor_enabled: Option<bool>,
}
