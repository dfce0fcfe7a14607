//! Client configuration and one-shot base-URL resolution.

use std::path::PathBuf;

use url::Url;

use crate::errors::ClientError;
use crate::messages::Language;

/// Environment variable that overrides the backend base URL.
pub const API_URL_ENV: &str = "ROBOADVISOR_API_URL";

/// Development default when the client runs against a local backend.
const LOCALHOST_BASE: &str = "http://localhost:8000";

/// Path under which the hosting platform mounts the backend in production.
const PRODUCTION_PATH: &str = "/roboadvisor-frontend-backend";

/// Fixed name of the persisted token entry (the browser-storage key analog).
const TOKEN_FILE_NAME: &str = "auth_token";

/// Configuration resolved once at client construction.
/// The base URL is not reconfigurable afterward.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub language: Language,
    /// Where the session token is mirrored on disk.
    pub token_path: PathBuf,
}

impl ClientConfig {
    /// Build a configuration from an explicit override and the origin the
    /// client is deployed against. See [`resolve_base_url`] for precedence.
    pub fn new(
        base_url_override: Option<&str>,
        origin: Option<&str>,
        language: Language,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            base_url: resolve_base_url(base_url_override, origin)?,
            language,
            token_path: default_token_path(),
        })
    }

    /// Like [`ClientConfig::new`], reading the override from
    /// `ROBOADVISOR_API_URL`.
    pub fn from_env(origin: Option<&str>, language: Language) -> Result<Self, ClientError> {
        let env_override = std::env::var(API_URL_ENV).ok();
        Self::new(env_override.as_deref(), origin, language)
    }

    /// Replace the token file location (tests use a temp directory).
    #[must_use]
    pub fn with_token_path(mut self, path: PathBuf) -> Self {
        self.token_path = path;
        self
    }
}

/// Resolve the backend base URL, once:
/// 1. an explicit override always wins;
/// 2. else, when the deployment origin's host is localhost, the local
///    development backend;
/// 3. else the fixed production path joined onto the origin.
///
/// With no origin at all the local development default is used.
pub fn resolve_base_url(
    base_url_override: Option<&str>,
    origin: Option<&str>,
) -> Result<Url, ClientError> {
    if let Some(explicit) = base_url_override {
        return parse_url(explicit);
    }

    let Some(origin) = origin else {
        return parse_url(LOCALHOST_BASE);
    };

    let origin_url = parse_url(origin)?;
    match origin_url.host_str() {
        Some("localhost") | Some("127.0.0.1") => parse_url(LOCALHOST_BASE),
        _ => origin_url
            .join(PRODUCTION_PATH)
            .map_err(|e| ClientError::Config(format!("invalid production base URL: {e}"))),
    }
}

/// `<data dir>/roboadvisor/auth_token`, shared by every client process of
/// the same user (the cross-tab storage analog).
#[must_use]
pub fn default_token_path() -> PathBuf {
    let mut path = dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(std::env::temp_dir);
    path.push("roboadvisor");
    path.push(TOKEN_FILE_NAME);
    path
}

fn parse_url(raw: &str) -> Result<Url, ClientError> {
    Url::parse(raw).map_err(|e| ClientError::Config(format!("invalid base URL '{raw}': {e}")))
}
