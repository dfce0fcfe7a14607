use serde::{Deserialize, Serialize};

/// Successful login answer. The opaque `access_token` goes straight into
/// the session store; nothing else is inspected client-side.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// The authenticated user as reported by `GET /api/auth/me`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TwoFactorSetupRequest {
    pub enable: bool,
    pub password: String,
}
