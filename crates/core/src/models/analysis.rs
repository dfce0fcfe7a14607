use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// AI verdict on a single position's fundamentals.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FundamentalAnalysisItem {
    pub ticker: String,
    pub summary: String,
    /// "fair", "undervalued" or "overvalued".
    pub valuation: String,
}

/// AI verdict on a single position's technicals.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TechnicalAnalysisItem {
    pub ticker: String,
    pub trend: String,
    pub rsi: String,
    pub signal: String,
}

/// Breakdown maps are percentages keyed by region/sector/position name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Diversification {
    #[serde(rename = "regionBreakdown", default)]
    pub region_breakdown: HashMap<String, f64>,
    #[serde(rename = "sectorBreakdown", default)]
    pub sector_breakdown: HashMap<String, f64>,
    #[serde(rename = "positionWeights", default)]
    pub position_weights: HashMap<String, f64>,
}

impl Diversification {
    /// The position weights sorted descending, truncated to `n`. This is
    /// the only ordering the client imposes on any server list; the
    /// rebalancing view shows the top 10.
    #[must_use]
    pub fn top_position_weights(&self, n: usize) -> Vec<(String, f64)> {
        let mut weights: Vec<(String, f64)> = self
            .position_weights
            .iter()
            .map(|(name, weight)| (name.clone(), *weight))
            .collect();
        weights.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        weights.truncate(n);
        weights
    }
}

/// Result of `POST /api/portfolio/analyze`. Ephemeral: held only in the
/// triggering store's state, discarded with it, never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioAnalysis {
    #[serde(rename = "fundamentalAnalysis", default)]
    pub fundamental_analysis: Vec<FundamentalAnalysisItem>,
    #[serde(rename = "technicalAnalysis", default)]
    pub technical_analysis: Vec<TechnicalAnalysisItem>,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub diversification: Diversification,
    #[serde(rename = "cashAssessment", default)]
    pub cash_assessment: String,
    #[serde(rename = "suggestedRebalancing", default)]
    pub suggested_rebalancing: String,
    #[serde(rename = "shortTermAdvice", default)]
    pub short_term_advice: String,
    #[serde(rename = "longTermAdvice", default)]
    pub long_term_advice: String,
    /// True when the server answered from its analysis cache.
    #[serde(default)]
    pub cached: bool,
    #[serde(default)]
    pub generated_at: Option<String>,
}

/// Result of `POST /api/watchlist/analyze` for one item. The analysis
/// sections are free-form JSON the AI produced.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchlistAnalysis {
    pub item_id: i64,
    pub asset_name: String,
    #[serde(default)]
    pub asset_isin: Option<String>,
    #[serde(default)]
    pub asset_ticker: Option<String>,
    #[serde(rename = "fundamentalAnalysis", default)]
    pub fundamental_analysis: Option<serde_json::Value>,
    #[serde(rename = "technicalAnalysis", default)]
    pub technical_analysis: Option<serde_json::Value>,
    pub analysis_date: String,
    #[serde(default)]
    pub cached: bool,
}

/// Request body for both analysis endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
    pub force_refresh: bool,
}
