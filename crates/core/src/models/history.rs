use serde::Deserialize;

/// The stored payload of one past analysis run. Sections are optional:
/// portfolio runs store breakdowns, single-asset runs store a
/// recommendation and price target.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisData {
    #[serde(rename = "fundamentalAnalysis", default)]
    pub fundamental_analysis: Option<serde_json::Value>,
    #[serde(rename = "technicalAnalysis", default)]
    pub technical_analysis: Option<serde_json::Value>,
    #[serde(default)]
    pub risks: Option<Vec<String>>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(rename = "priceTarget", default)]
    pub price_target: Option<serde_json::Value>,
}

/// One read-only history entry, fetched per holding/watchlist item on
/// demand.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisHistoryEntry {
    pub id: i64,
    #[serde(default)]
    pub portfolio_holding_id: Option<i64>,
    #[serde(default)]
    pub watchlist_item_id: Option<i64>,
    pub asset_name: String,
    #[serde(default)]
    pub asset_isin: Option<String>,
    #[serde(default)]
    pub asset_ticker: Option<String>,
    pub analysis_data: AnalysisData,
    pub created_at: String,
}

/// Per-asset rollup from `GET /api/analysis-history/summary`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisHistorySummary {
    pub asset_name: String,
    #[serde(default)]
    pub asset_isin: Option<String>,
    #[serde(default)]
    pub asset_ticker: Option<String>,
    pub total_analyses: u32,
    pub latest_analysis_date: String,
    #[serde(default)]
    pub latest_analysis: Option<serde_json::Value>,
}
