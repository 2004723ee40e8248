//! Provider seam and API response wrappers

use serde::Deserialize;

use crate::error::Result;
use crate::listing::{FilterClause, Record};
use crate::provider::PaginationMeta;

/// Source of resource records
///
/// `path` names a collection such as `compute/instances`. Filter clauses are
/// ANDed by the provider; provider errors are returned unmodified.
#[allow(async_fn_in_trait)]
pub trait ResourceProvider {
    /// List every record of a collection, following pagination
    async fn list(&self, path: &str, filters: &[FilterClause]) -> Result<Vec<Record>>;

    /// Fetch a single record
    async fn get(&self, path: &str) -> Result<Record>;
}

/// Trait for API responses that contain paginated data
pub trait PaginatedResponse<T> {
    /// Consume self and return the data items
    fn into_data(self) -> Vec<T>;
    /// Get reference to pagination metadata
    fn meta(&self) -> Option<&PaginationMeta>;
}

/// Generic API list response wrapper for paginated endpoints
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
}

impl<T> PaginatedResponse<T> for ApiListResponse<T> {
    fn into_data(self) -> Vec<T> {
        self.data
    }

    fn meta(&self) -> Option<&PaginationMeta> {
        self.meta.as_ref()
    }
}

/// API response wrapper for a single item
#[derive(Deserialize, Debug)]
pub struct ApiItemResponse<T> {
    pub data: T,
}
