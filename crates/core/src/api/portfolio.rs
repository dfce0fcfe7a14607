//! Portfolio CRUD, dashboard aggregates and AI analysis endpoints.

use crate::errors::ClientError;
use crate::models::analysis::{AnalysisRequest, PortfolioAnalysis};
use crate::models::dashboard::{
    AllocationData, PerformanceHistory, PortfolioSummary, RiskMetrics,
};
use crate::models::portfolio::{Holding, HoldingDraft, HoldingUpdate};
use crate::models::MessageResponse;

use super::ApiClient;

impl ApiClient {
    // ── CRUD ────────────────────────────────────────────────────────

    /// All holdings of the current user, order as served.
    pub async fn portfolio(&self) -> Result<Vec<Holding>, ClientError> {
        self.get("/api/portfolio").await
    }

    pub async fn portfolio_holding(&self, id: i64) -> Result<Holding, ClientError> {
        self.get(&format!("/api/portfolio/{id}")).await
    }

    pub async fn create_holding(&self, draft: &HoldingDraft) -> Result<Holding, ClientError> {
        self.post("/api/portfolio", draft).await
    }

    pub async fn update_holding(
        &self,
        id: i64,
        update: &HoldingUpdate,
    ) -> Result<Holding, ClientError> {
        self.put(&format!("/api/portfolio/{id}"), update).await
    }

    pub async fn delete_holding(&self, id: i64) -> Result<MessageResponse, ClientError> {
        self.delete(&format!("/api/portfolio/{id}")).await
    }

    // ── Dashboard aggregates ────────────────────────────────────────

    pub async fn portfolio_summary(&self) -> Result<PortfolioSummary, ClientError> {
        self.get("/api/portfolio/dashboard/summary").await
    }

    pub async fn performance_history(&self, days: u32) -> Result<PerformanceHistory, ClientError> {
        self.get(&format!("/api/portfolio/dashboard/performance?days={days}"))
            .await
    }

    pub async fn portfolio_allocation(&self) -> Result<AllocationData, ClientError> {
        self.get("/api/portfolio/dashboard/allocation").await
    }

    pub async fn risk_metrics(&self) -> Result<RiskMetrics, ClientError> {
        self.get("/api/portfolio/dashboard/risk").await
    }

    // ── AI analysis ─────────────────────────────────────────────────

    /// Run the AI analysis over the whole portfolio. `force_refresh`
    /// requests the server bypass its cached result.
    pub async fn analyze_portfolio(
        &self,
        force_refresh: bool,
    ) -> Result<PortfolioAnalysis, ClientError> {
        self.post(
            "/api/portfolio/analyze",
            &AnalysisRequest {
                item_id: None,
                force_refresh,
            },
        )
        .await
    }

    pub async fn clear_analysis_cache(&self) -> Result<MessageResponse, ClientError> {
        self.delete("/api/portfolio/analyze/cache").await
    }
}
