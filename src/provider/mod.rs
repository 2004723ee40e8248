//! Resource providers
//!
//! Records come either from the inventory HTTP API or from a snapshot file.

mod client;
mod credentials;
mod snapshot;
pub mod traits;

use serde::Deserialize;

use crate::error::Result;
use crate::listing::{FilterClause, Record};

pub use client::InventoryClient;
pub use credentials::TokenResolver;
pub use snapshot::{matches_clause, SnapshotProvider};
pub use traits::{ApiItemResponse, ApiListResponse, PaginatedResponse, ResourceProvider};

/// Pagination metadata from the inventory API
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PaginationMeta {
    pub pagination: Option<Pagination>,
}

/// Pagination details
#[derive(Deserialize, Debug, Clone)]
pub struct Pagination {
    #[serde(rename = "current-page")]
    pub current_page: u32,
    #[serde(rename = "total-pages")]
    pub total_pages: u32,
    #[serde(rename = "total-count")]
    pub total_count: u32,
}

/// The provider selected for this invocation
pub enum Provider {
    Inventory(InventoryClient),
    Snapshot(SnapshotProvider),
}

impl ResourceProvider for Provider {
    async fn list(&self, path: &str, filters: &[FilterClause]) -> Result<Vec<Record>> {
        match self {
            Provider::Inventory(client) => client.list(path, filters).await,
            Provider::Snapshot(snapshot) => snapshot.list(path, filters).await,
        }
    }

    async fn get(&self, path: &str) -> Result<Record> {
        match self {
            Provider::Inventory(client) => client.get(path).await,
            Provider::Snapshot(snapshot) => snapshot.get(path).await,
        }
    }
}

/// Host part of an endpoint URL, used to key stored credentials
pub fn endpoint_host(endpoint: &str) -> String {
    reqwest::Url::parse(endpoint)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| endpoint.to_string())
}
