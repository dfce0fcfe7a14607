//! Watchlist CRUD and per-item AI analysis endpoints.

use crate::errors::ClientError;
use crate::models::analysis::{AnalysisRequest, WatchlistAnalysis};
use crate::models::watchlist::{WatchlistItem, WatchlistItemDraft, WatchlistItemUpdate};
use crate::models::MessageResponse;

use super::ApiClient;

impl ApiClient {
    /// All watchlist entries of the current user, order as served.
    pub async fn watchlist(&self) -> Result<Vec<WatchlistItem>, ClientError> {
        self.get("/api/watchlist").await
    }

    pub async fn watchlist_item(&self, id: i64) -> Result<WatchlistItem, ClientError> {
        self.get(&format!("/api/watchlist/{id}")).await
    }

    pub async fn create_watchlist_item(
        &self,
        draft: &WatchlistItemDraft,
    ) -> Result<WatchlistItem, ClientError> {
        self.post("/api/watchlist", draft).await
    }

    pub async fn update_watchlist_item(
        &self,
        id: i64,
        update: &WatchlistItemUpdate,
    ) -> Result<WatchlistItem, ClientError> {
        self.put(&format!("/api/watchlist/{id}"), update).await
    }

    pub async fn delete_watchlist_item(&self, id: i64) -> Result<MessageResponse, ClientError> {
        self.delete(&format!("/api/watchlist/{id}")).await
    }

    /// Analyze one item, or every item when `item_id` is `None`. Returns
    /// one result per analyzed item.
    pub async fn analyze_watchlist(
        &self,
        item_id: Option<i64>,
        force_refresh: bool,
    ) -> Result<Vec<WatchlistAnalysis>, ClientError> {
        self.post(
            "/api/watchlist/analyze",
            &AnalysisRequest {
                item_id,
                force_refresh,
            },
        )
        .await
    }
}
