//! Personal collection endpoints
//!
//! The collection grid always re-fetches after a mutation; the service
//! therefore only ever returns fresh lists, never patched ones.

use std::sync::Arc;

use ludex_core::{CollectionEntry, CollectionStatus};

use crate::error::ApiResult;
use crate::transport::Transport;

#[derive(Clone)]
pub struct CollectionService {
    transport: Arc<dyn Transport>,
}

impl CollectionService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// List the signed-in user's collection, optionally narrowed to one
    /// status.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, status: Option<CollectionStatus>) -> ApiResult<Vec<CollectionEntry>> {
        let query = match status {
            Some(CollectionStatus::Owned) => vec![("status".to_string(), "owned".to_string())],
            Some(CollectionStatus::Wished) => vec![("status".to_string(), "wished".to_string())],
            None => Vec::new(),
        };
        let value = self.transport.get("collection", &query).await?;
        let entries: Vec<CollectionEntry> = serde_json::from_value(value)?;
        tracing::debug!(entries = entries.len(), "collection loaded");
        Ok(entries)
    }

    #[tracing::instrument(skip(self))]
    pub async fn add(&self, game_id: i64, status: CollectionStatus) -> ApiResult<CollectionEntry> {
        let body = serde_json::json!({ "gameId": game_id, "status": status });
        let value = self.transport.post("collection", body).await?;
        tracing::info!("collection entry added");
        Ok(serde_json::from_value(value)?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn set_status(
        &self,
        entry_id: i64,
        status: CollectionStatus,
    ) -> ApiResult<CollectionEntry> {
        let body = serde_json::json!({ "status": status });
        let value = self
            .transport
            .put(&format!("collection/{entry_id}"), body)
            .await?;
        tracing::info!("collection entry updated");
        Ok(serde_json::from_value(value)?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, entry_id: i64) -> ApiResult<()> {
        self.transport
            .delete(&format!("collection/{entry_id}"))
            .await?;
        tracing::info!("collection entry removed");
        Ok(())
    }
}
