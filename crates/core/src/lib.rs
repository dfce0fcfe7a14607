pub mod api;
pub mod config;
pub mod csv;
pub mod errors;
pub mod health;
pub mod messages;
pub mod models;
pub mod session;
pub mod state;
pub mod toast;
pub mod validate;

use std::sync::Arc;

use api::{AnalysisGateway, ApiClient, HealthGateway, UserGateway};
use config::ClientConfig;
use errors::ClientError;
use health::HealthMonitor;
use messages::Language;
use session::SessionStore;
use state::{PortfolioAnalysisStore, ProfileStore, SettingsStore, WatchlistAnalysisStore};
use toast::ToastStore;

/// Main entry point for the RoboAdvisor client core.
///
/// Wires configuration → session store → API client once, then hands out
/// the per-view state containers a shell drives. The containers are
/// independent of each other on purpose: there is no shared cache, and a
/// view that wants fresh data refetches its own container.
#[must_use]
pub struct RoboAdvisor {
    api: Arc<ApiClient>,
    session: Arc<SessionStore>,
    toasts: Arc<ToastStore>,
    language: Language,
}

impl std::fmt::Debug for RoboAdvisor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoboAdvisor")
            .field("api", &self.api)
            .field("authenticated", &self.session.is_authenticated())
            .finish()
    }
}

impl RoboAdvisor {
    /// Build a client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Self {
        let session = Arc::new(SessionStore::open(config.token_path.clone()));
        let api = Arc::new(ApiClient::new(&config, Arc::clone(&session)));
        Self {
            api,
            session,
            toasts: Arc::new(ToastStore::new()),
            language: config.language,
        }
    }

    /// Build a client resolving the base URL from `ROBOADVISOR_API_URL` /
    /// the deployment origin.
    pub fn from_env(origin: Option<&str>, language: Language) -> Result<Self, ClientError> {
        Ok(Self::new(ClientConfig::from_env(origin, language)?))
    }

    // ── Shared singletons ───────────────────────────────────────────

    #[must_use]
    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    #[must_use]
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    #[must_use]
    pub fn toasts(&self) -> &Arc<ToastStore> {
        &self.toasts
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Re-read the persisted token (another process may have logged in or
    /// out). The shell calls this from its focus/storage events; observers
    /// registered on the session store fire when the value changed.
    pub fn revalidate_session(&self) -> bool {
        self.session.reload_from_disk()
    }

    // ── Per-view state containers ───────────────────────────────────

    #[must_use]
    pub fn settings_store(&self) -> SettingsStore {
        SettingsStore::new(Arc::clone(&self.api) as Arc<dyn UserGateway>)
    }

    #[must_use]
    pub fn profile_store(&self) -> ProfileStore {
        ProfileStore::new(Arc::clone(&self.api) as Arc<dyn UserGateway>)
    }

    #[must_use]
    pub fn portfolio_analysis_store(&self) -> PortfolioAnalysisStore {
        PortfolioAnalysisStore::new(Arc::clone(&self.api) as Arc<dyn AnalysisGateway>)
    }

    #[must_use]
    pub fn watchlist_analysis_store(&self) -> WatchlistAnalysisStore {
        WatchlistAnalysisStore::new(Arc::clone(&self.api) as Arc<dyn AnalysisGateway>)
    }

    #[must_use]
    pub fn health_monitor(&self) -> Arc<HealthMonitor> {
        Arc::new(HealthMonitor::new(
            Arc::clone(&self.api) as Arc<dyn HealthGateway>
        ))
    }
}
