use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::messages::{self, Language};
use crate::session::SessionStore;

/// Single point of contact with the backend. Holds the shared HTTP
/// connection pool, the base URL resolved once at construction, and the
/// session store the bearer token is read from.
pub struct ApiClient {
    pub(crate) http: Client,
    /// Base URL without trailing slash; endpoint paths are appended as-is.
    pub(crate) base: String,
    pub(crate) session: Arc<SessionStore>,
    pub(crate) language: Language,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.base)
            .field("language", &self.language)
            .finish()
    }
}

impl ApiClient {
    #[must_use]
    pub fn new(config: &ClientConfig, session: Arc<SessionStore>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            http,
            base: config.base_url.as_str().trim_end_matches('/').to_string(),
            session,
            language: config.language,
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    // ── Request core ────────────────────────────────────────────────

    /// Issue a JSON request and deserialize the answer.
    ///
    /// The body is read as text first (it can only be read once), then
    /// parsed; a non-JSON body becomes `BadResponse`, an error status is
    /// classified into a user-facing message, and every failure is logged
    /// with full detail before it is returned.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ClientError> {
        let url = self.url(path);
        let mut builder = self
            .http
            .request(method, &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(url = %url, error = %e, "API request failed");
            ClientError::Network(messages::generic(self.language).to_string())
        })?;

        let status = response.status().as_u16();
        let ok = response.status().is_success();
        let text = response.text().await.map_err(|e| {
            tracing::error!(url = %url, status, error = %e, "failed to read response body");
            ClientError::Network(messages::generic(self.language).to_string())
        })?;

        self.finish_json(&url, status, ok, &text)
    }

    /// Shared tail of the JSON path, also used by the multipart upload:
    /// parse the body text, classify error statuses, deserialize.
    pub(crate) fn finish_json<T: DeserializeOwned>(
        &self,
        url: &str,
        status: u16,
        ok: bool,
        text: &str,
    ) -> Result<T, ClientError> {
        let data: serde_json::Value = if text.is_empty() {
            serde_json::Value::Null
        } else {
            match serde_json::from_str(text) {
                Ok(value) => value,
                Err(e) => {
                    tracing::error!(url = %url, status, error = %e, "response body is not JSON");
                    return Err(ClientError::BadResponse {
                        status,
                        message: messages::status_message(self.language, status).to_string(),
                    });
                }
            }
        };

        if !ok {
            let backend_message = data
                .get("detail")
                .or_else(|| data.get("error"))
                .and_then(serde_json::Value::as_str);
            tracing::error!(url = %url, status, backend_message, "API error response");
            return Err(ClientError::Api {
                status,
                message: messages::classify(self.language, status, backend_message),
            });
        }

        serde_json::from_value(data).map_err(|e| {
            tracing::error!(url = %url, error = %e, "response did not match the expected model");
            ClientError::Deserialization(messages::generic(self.language).to_string())
        })
    }

    // ── Thin verb helpers ───────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(Method::GET, path, None).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::PUT, path, Some(body)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(Method::DELETE, path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        detail_code: u32,
    }

    fn client() -> ApiClient {
        let dir = std::env::temp_dir().join("roboadvisor-client-test");
        let config = ClientConfig::new(Some("http://localhost:8000"), None, Language::De)
            .unwrap()
            .with_token_path(dir.join("auth_token"));
        let session = Arc::new(SessionStore::open(config.token_path.clone()));
        ApiClient::new(&config, session)
    }

    #[test]
    fn malformed_body_becomes_bad_response_before_any_field_access() {
        let client = client();
        let err = client
            .finish_json::<Payload>("http://x/api/y", 200, true, "<html>oops</html>")
            .unwrap_err();
        match err {
            ClientError::BadResponse { status, .. } => assert_eq!(status, 200),
            other => panic!("expected BadResponse, got {other:?}"),
        }
    }

    #[test]
    fn error_status_with_clean_detail_is_passed_through() {
        let client = client();
        let err = client
            .finish_json::<Payload>(
                "http://x/api/y",
                404,
                false,
                r#"{"detail": "Position wurde bereits gelöscht"}"#,
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "Position wurde bereits gelöscht");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn error_status_with_leaky_detail_falls_back_to_the_status_text() {
        let client = client();
        let err = client
            .finish_json::<Payload>(
                "http://x/api/y",
                404,
                false,
                r#"{"detail": "Traceback (most recent call last)"}"#,
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "Ressource nicht gefunden");
    }

    #[test]
    fn error_field_is_read_when_detail_is_absent() {
        let client = client();
        let err = client
            .finish_json::<Payload>(
                "http://x/api/y",
                400,
                false,
                r#"{"error": "Bitte ein Kaufdatum angeben"}"#,
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "Bitte ein Kaufdatum angeben");
    }

    #[test]
    fn success_body_deserializes_into_the_typed_model() {
        let client = client();
        let payload: Payload = client
            .finish_json("http://x/api/y", 200, true, r#"{"detail_code": 7}"#)
            .unwrap();
        assert_eq!(payload.detail_code, 7);
    }

    #[test]
    fn empty_success_body_is_a_unit() {
        let client = client();
        client
            .finish_json::<()>("http://x/api/y", 200, true, "")
            .unwrap();
    }

    #[test]
    fn mismatched_success_body_is_a_deserialization_error() {
        let client = client();
        let err = client
            .finish_json::<Payload>("http://x/api/y", 200, true, r#"{"other": true}"#)
            .unwrap_err();
        assert!(matches!(err, ClientError::Deserialization(_)));
    }
}
