//! Inventory HTTP client
//!
//! Pages are requested one after another; the first page's pagination
//! metadata tells how many more to fetch.

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use crate::config::api;
use crate::error::{CloudlsError, Result};
use crate::listing::{FilterClause, Record};
use crate::provider::traits::{
    ApiItemResponse, ApiListResponse, PaginatedResponse, ResourceProvider,
};

/// Inventory API client
pub struct InventoryClient {
    client: Client,
    token: String,
    endpoint: String,
}

impl InventoryClient {
    /// Create a new client for an endpoint URL (scheme and host, optional path)
    pub fn new(token: String, endpoint: &str) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        format!("{}{}", self.endpoint, api::BASE_PATH)
    }

    /// Create a GET request builder with standard headers
    fn get_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json")
    }

    /// Parse an API response, returning error for non-success status codes
    async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(CloudlsError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// Query string carrying the filter clauses
    fn filter_query(filters: &[FilterClause]) -> String {
        filters
            .iter()
            .map(|f| {
                format!(
                    "filter[{}]={}",
                    urlencoding::encode(f.name()),
                    urlencoding::encode(f.value())
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    fn page_url(&self, path: &str, query: &str, page: u32) -> String {
        let separator = if query.is_empty() { "" } else { "&" };
        format!(
            "{}/{}?{}{}page[size]={}&page[number]={}",
            self.base_url(),
            path.trim_start_matches('/'),
            query,
            separator,
            api::DEFAULT_PAGE_SIZE,
            page
        )
    }

    /// Fetch all pages of a collection sequentially
    pub async fn fetch_all_pages<T, R>(
        &self,
        path: &str,
        filters: &[FilterClause],
    ) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let query = Self::filter_query(filters);
        let mut items = Vec::new();
        let mut page = 1;

        loop {
            let url = self.page_url(path, &query, page);
            debug!("Fetching page {} from: {}", page, url);

            let response = self.get_request(&url).send().await?;
            let context = format!("{} (page {})", path, page);
            let resp: R = self.parse_api_response(response, &context).await?;

            let pagination = resp.meta().and_then(|m| m.pagination.clone());
            let total_pages = pagination.as_ref().map(|p| p.total_pages).unwrap_or(1);
            let data = resp.into_data();
            match pagination {
                Some(p) => debug!(
                    "Page {}/{} returned {} items ({} total)",
                    p.current_page,
                    p.total_pages,
                    data.len(),
                    p.total_count
                ),
                None => debug!("Page {} returned {} items (no pagination meta)", page, data.len()),
            }
            items.extend(data);

            if page >= total_pages {
                break;
            }
            page += 1;
        }

        debug!("Fetched {} total items for {}", items.len(), path);
        Ok(items)
    }
}

impl ResourceProvider for InventoryClient {
    async fn list(&self, path: &str, filters: &[FilterClause]) -> Result<Vec<Record>> {
        let items = self
            .fetch_all_pages::<Value, ApiListResponse<Value>>(path, filters)
            .await?;
        Ok(items.into_iter().map(Record::new).collect())
    }

    async fn get(&self, path: &str) -> Result<Record> {
        let url = format!("{}/{}", self.base_url(), path.trim_start_matches('/'));
        debug!("Fetching {} from: {}", path, url);
        let response = self.get_request(&url).send().await?;
        let resp: ApiItemResponse<Value> = self.parse_api_response(response, path).await?;
        Ok(Record::new(resp.data))
    }
}

#[cfg(test)]
impl InventoryClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::new("test-token".to_string(), base_url)
    }
}


#[cfg(test)]
mod pagination_tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn page_body(ids: &[&str], current: u32, total_pages: u32, total_count: u32) -> Value {
        serde_json::json!({
            "data": ids.iter().map(|id| serde_json::json!({"id": id})).collect::<Vec<_>>(),
            "meta": {
                "pagination": {
                    "current-page": current,
                    "total-pages": total_pages,
                    "total-count": total_count
                }
            }
        })
    }

    fn ids(records: &[Record]) -> Vec<String> {
        records
            .iter()
            .map(|r| r.fields()["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_list_single_page() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/compute/instances"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["i-1", "i-2"], 1, 1, 2)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = InventoryClient::test_client(&mock_server.uri());
        let records = client.list("compute/instances", &[]).await.unwrap();
        assert_eq!(ids(&records), vec!["i-1", "i-2"]);
    }

    #[tokio::test]
    async fn test_list_follows_pages_in_order() {
        let mock_server = MockServer::start().await;
        for (page, page_ids) in [(1u32, vec!["a", "b"]), (2, vec!["c", "d"]), (3, vec!["e"])] {
            Mock::given(method("GET"))
                .and(path("/v1/compute/volumes"))
                .and(query_param("page[number]", page.to_string()))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(page_body(&page_ids, page, 3, 5)),
                )
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let client = InventoryClient::test_client(&mock_server.uri());
        let records = client.list("compute/volumes", &[]).await.unwrap();
        assert_eq!(ids(&records), vec!["a", "b", "c", "d", "e"]);
    }

    #[tokio::test]
    async fn test_list_without_meta_is_single_page() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/storage/buckets"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": [{"id": "bucket-1"}]})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = InventoryClient::test_client(&mock_server.uri());
        let records = client.list("storage/buckets", &[]).await.unwrap();
        assert_eq!(ids(&records), vec!["bucket-1"]);
    }

    #[tokio::test]
    async fn test_list_sends_filter_clauses() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/compute/instances"))
            .and(query_param("filter[state]", "running"))
            .and(query_param("filter[tag:Owner]", "alice"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["i-7"], 1, 1, 1)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = InventoryClient::test_client(&mock_server.uri());
        let filters = vec![
            FilterClause::new("state", "running"),
            FilterClause::new("tag:Owner", "alice"),
        ];
        let records = client.list("compute/instances", &filters).await.unwrap();
        assert_eq!(ids(&records), vec!["i-7"]);
    }

    #[tokio::test]
    async fn test_list_error_propagates_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/iam/roles"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let client = InventoryClient::test_client(&mock_server.uri());
        match client.list("iam/roles", &[]).await {
            Err(CloudlsError::Api { status, message }) => {
                assert_eq!(status, 403);
                assert!(message.contains("iam/roles"));
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_list_error_on_later_page() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/iam/policies"))
            .and(query_param("page[number]", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["p-1"], 1, 2, 2)))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/iam/policies"))
            .and(query_param("page[number]", "2"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let client = InventoryClient::test_client(&mock_server.uri());
        match client.list("iam/policies", &[]).await {
            Err(CloudlsError::Api { status, message }) => {
                assert_eq!(status, 429);
                assert!(message.contains("page 2"));
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_single_record() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/iam/current-user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": {"UserId": "AIDA1", "Arn": "arn:aws:iam::123456789012:user/alice"}
            })))
            .mount(&mock_server)
            .await;

        let client = InventoryClient::test_client(&mock_server.uri());
        let record = client.get("iam/current-user").await.unwrap();
        assert_eq!(record.fields()["UserId"], "AIDA1");
    }
}
