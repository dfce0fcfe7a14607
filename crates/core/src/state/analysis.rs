//! AI-analysis containers. No auto-fetch: an analysis only runs when the
//! user asks for one, and the result lives exactly as long as the
//! container.
//!
//! Concurrent `run_analysis` calls are neither deduplicated nor
//! cancelled; completions are applied unfenced, so whichever lands last
//! wins.

use std::sync::Arc;

use crate::api::AnalysisGateway;
use crate::errors::ClientError;
use crate::models::analysis::{PortfolioAnalysis, WatchlistAnalysis};

use super::resource::{Resource, ResourceSnapshot};

/// State container for `POST /api/portfolio/analyze`.
pub struct PortfolioAnalysisStore {
    gateway: Arc<dyn AnalysisGateway>,
    resource: Resource<PortfolioAnalysis>,
}

impl PortfolioAnalysisStore {
    #[must_use]
    pub fn new(gateway: Arc<dyn AnalysisGateway>) -> Self {
        Self {
            gateway,
            resource: Resource::new(),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> ResourceSnapshot<PortfolioAnalysis> {
        self.resource.snapshot()
    }

    #[must_use]
    pub fn data(&self) -> Option<PortfolioAnalysis> {
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

    /// Run an analysis: set loading, clear the prior error, store the
    /// result or the error, always clear loading. The result is also
    /// returned so a form handler can react without re-reading state.
    pub async fn run_analysis(
        &self,
        force_refresh: bool,
    ) -> Result<PortfolioAnalysis, ClientError> {
        self.resource.start_unfenced();
        match self.gateway.run_portfolio_analysis(force_refresh).await {
            Ok(analysis) => {
                self.resource.set_data(Some(analysis.clone()));
                Ok(analysis)
            }
            Err(e) => {
                self.resource.set_data(None);
                self.resource.set_error(e.to_string());
                Err(e)
            }
        }
    }

    /// Drop the server-side analysis cache and the locally held result.
    pub async fn clear_cache(&self) -> Result<(), ClientError> {
        match self.gateway.clear_portfolio_analysis_cache().await {
            Ok(()) => {
                self.resource.set_data(None);
                Ok(())
            }
            Err(e) => {
                self.resource.set_error(e.to_string());
                Err(e)
            }
        }
    }
}

/// State container for `POST /api/watchlist/analyze` (one result per
/// analyzed item).
pub struct WatchlistAnalysisStore {
    gateway: Arc<dyn AnalysisGateway>,
    resource: Resource<Vec<WatchlistAnalysis>>,
}

impl WatchlistAnalysisStore {
    #[must_use]
    pub fn new(gateway: Arc<dyn AnalysisGateway>) -> Self {
        Self {
            gateway,
            resource: Resource::new(),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> ResourceSnapshot<Vec<WatchlistAnalysis>> {
        self.resource.snapshot()
    }

    #[must_use]
    pub fn data(&self) -> Option<Vec<WatchlistAnalysis>> {
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

    /// Analyze one item (`Some(id)`) or the whole watchlist (`None`).
    pub async fn run_analysis(
        &self,
        item_id: Option<i64>,
        force_refresh: bool,
    ) -> Result<Vec<WatchlistAnalysis>, ClientError> {
        self.resource.start_unfenced();
        match self
            .gateway
            .run_watchlist_analysis(item_id, force_refresh)
            .await
        {
            Ok(results) => {
                self.resource.set_data(Some(results.clone()));
                Ok(results)
            }
            Err(e) => {
                self.resource.set_data(None);
                self.resource.set_error(e.to_string());
                Err(e)
            }
        }
    }
}
