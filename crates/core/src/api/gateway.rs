use async_trait::async_trait;

use crate::errors::ClientError;
use crate::models::analysis::{PortfolioAnalysis, WatchlistAnalysis};
use crate::models::health::HealthPayload;
use crate::models::user::{UserProfile, UserProfilePatch, UserSettings, UserSettingsPatch};

use super::ApiClient;

/// Backend seam for the profile/settings state containers.
///
/// The state containers depend on these traits rather than on `ApiClient`
/// directly, so tests can swap in fakes with scripted failures. `ApiClient`
/// is the one production implementation.
#[async_trait]
pub trait UserGateway: Send + Sync {
    async fn fetch_profile(&self) -> Result<UserProfile, ClientError>;
    async fn push_profile(&self, patch: &UserProfilePatch) -> Result<UserProfile, ClientError>;
    async fn fetch_settings(&self) -> Result<UserSettings, ClientError>;
    async fn push_settings(&self, patch: &UserSettingsPatch) -> Result<UserSettings, ClientError>;
}

/// Backend seam for the AI-analysis state containers.
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    async fn run_portfolio_analysis(
        &self,
        force_refresh: bool,
    ) -> Result<PortfolioAnalysis, ClientError>;

    async fn clear_portfolio_analysis_cache(&self) -> Result<(), ClientError>;

    async fn run_watchlist_analysis(
        &self,
        item_id: Option<i64>,
        force_refresh: bool,
    ) -> Result<Vec<WatchlistAnalysis>, ClientError>;
}

/// Backend seam for the health monitor.
#[async_trait]
pub trait HealthGateway: Send + Sync {
    async fn check(&self) -> Result<HealthPayload, ClientError>;
}

#[async_trait]
impl UserGateway for ApiClient {
    async fn fetch_profile(&self) -> Result<UserProfile, ClientError> {
        self.user_profile().await
    }

    async fn push_profile(&self, patch: &UserProfilePatch) -> Result<UserProfile, ClientError> {
        self.update_user_profile(patch).await
    }

    async fn fetch_settings(&self) -> Result<UserSettings, ClientError> {
        self.user_settings().await
    }

    async fn push_settings(&self, patch: &UserSettingsPatch) -> Result<UserSettings, ClientError> {
        self.update_user_settings(patch).await
    }
}

#[async_trait]
impl AnalysisGateway for ApiClient {
    async fn run_portfolio_analysis(
        &self,
        force_refresh: bool,
    ) -> Result<PortfolioAnalysis, ClientError> {
        self.analyze_portfolio(force_refresh).await
    }

    async fn clear_portfolio_analysis_cache(&self) -> Result<(), ClientError> {
        self.clear_analysis_cache().await.map(|_| ())
    }

    async fn run_watchlist_analysis(
        &self,
        item_id: Option<i64>,
        force_refresh: bool,
    ) -> Result<Vec<WatchlistAnalysis>, ClientError> {
        self.analyze_watchlist(item_id, force_refresh).await
    }
}

#[async_trait]
impl HealthGateway for ApiClient {
    async fn check(&self) -> Result<HealthPayload, ClientError> {
        self.health_check().await
    }
}
