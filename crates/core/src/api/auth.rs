//! Authentication endpoints.

use crate::errors::ClientError;
use crate::models::auth::{AuthUser, LoginRequest, RegisterRequest, TokenResponse};
use crate::models::health::HealthPayload;

use super::ApiClient;

impl ApiClient {
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthUser, ClientError> {
        self.post(
            "/api/auth/register",
            &RegisterRequest {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    /// Log in and, on success, store the returned access token in the
    /// session (memory + persistent mirror).
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ClientError> {
        let response: TokenResponse = self
            .post(
                "/api/auth/login-json",
                &LoginRequest {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;
        self.session.set_token(Some(&response.access_token))?;
        Ok(response)
    }

    pub async fn current_user(&self) -> Result<AuthUser, ClientError> {
        self.get("/api/auth/me").await
    }

    /// Local only: clears the session token. The backend keeps no session
    /// state to invalidate.
    pub fn logout(&self) -> Result<(), ClientError> {
        self.session.set_token(None)
    }

    /// Unauthenticated probe used by the status indicator.
    pub async fn health_check(&self) -> Result<HealthPayload, ClientError> {
        self.get("/api/health").await
    }
}
