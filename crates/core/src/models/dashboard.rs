use serde::Deserialize;

use super::portfolio::Holding;

/// `GET /api/portfolio/dashboard/summary`: totals plus the valued
/// positions, order as served.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioSummary {
    pub total_purchase_value: f64,
    pub total_current_value: f64,
    pub total_gain_loss: f64,
    pub total_gain_loss_percent: f64,
    pub position_count: u32,
    pub positions: Vec<Holding>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PerformancePoint {
    pub date: String,
    pub value: f64,
}

/// `GET /api/portfolio/dashboard/performance?days=N`.
#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceHistory {
    pub data: Vec<PerformancePoint>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AllocationItem {
    pub category: String,
    pub value: f64,
    pub percentage: f64,
}

/// `GET /api/portfolio/dashboard/allocation`.
#[derive(Debug, Clone, Deserialize)]
pub struct AllocationData {
    pub by_sector: Vec<AllocationItem>,
    pub by_region: Vec<AllocationItem>,
    pub by_asset_class: Vec<AllocationItem>,
}

/// `GET /api/portfolio/dashboard/risk`. All figures are optional; the
/// backend omits what it cannot compute and the shell renders "N/A".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RiskMetrics {
    #[serde(default)]
    pub beta: Option<f64>,
    #[serde(default)]
    pub volatility: Option<f64>,
    #[serde(default)]
    pub sharpe_ratio: Option<f64>,
    #[serde(default)]
    pub max_drawdown: Option<f64>,
}
