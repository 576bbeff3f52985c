//! # Inventory Endpoints
//!
//! Read-only access to the backend's inventory projection. Scoping by
//! company happens client-side (see `CompanyScope`), so this wrapper stays a
//! single listing call and the row order the backend chose is preserved for
//! fingerprinting.

use tracing::debug;

use crate::error::ClientResult;
use crate::http::ApiClient;
use kardex_core::InventoryItem;

/// Inventory operations against the backend.
#[derive(Debug)]
pub struct InventoryApi<'a> {
    client: &'a ApiClient,
}

impl<'a> InventoryApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        InventoryApi { client }
    }

    /// Lists the full inventory projection, in backend order.
    pub async fn list(&self) -> ClientResult<Vec<InventoryItem>> {
        let items: Vec<InventoryItem> = self.client.get_json("/inventory").await?;
        debug!(count = items.len(), "fetched inventory rows");
        Ok(items)
    }
}
