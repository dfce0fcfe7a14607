//! Read-only analysis history endpoints.

use crate::errors::ClientError;
use crate::models::history::{AnalysisHistoryEntry, AnalysisHistorySummary};

use super::ApiClient;

impl ApiClient {
    pub async fn holding_history(
        &self,
        holding_id: i64,
    ) -> Result<Vec<AnalysisHistoryEntry>, ClientError> {
        self.get(&format!("/api/analysis-history/portfolio/{holding_id}"))
            .await
    }

    pub async fn watchlist_item_history(
        &self,
        item_id: i64,
    ) -> Result<Vec<AnalysisHistoryEntry>, ClientError> {
        self.get(&format!("/api/analysis-history/watchlist/{item_id}"))
            .await
    }

    /// History for an asset identified by ISIN and/or ticker.
    pub async fn asset_history(
        &self,
        isin: Option<&str>,
        ticker: Option<&str>,
    ) -> Result<Vec<AnalysisHistoryEntry>, ClientError> {
        let mut params = Vec::new();
        if let Some(isin) = isin {
            params.push(format!("isin={}", urlencode(isin)));
        }
        if let Some(ticker) = ticker {
            params.push(format!("ticker={}", urlencode(ticker)));
        }
        self.get(&format!("/api/analysis-history/asset?{}", params.join("&")))
            .await
    }

    pub async fn analysis_summary(&self) -> Result<Vec<AnalysisHistorySummary>, ClientError> {
        self.get("/api/analysis-history/summary").await
    }
}

/// Query-component percent-encoding for user-supplied identifiers.
fn urlencode(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}
