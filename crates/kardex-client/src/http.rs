//! # API Client Transport
//!
//! The HTTP plumbing every endpoint wrapper goes through.
//!
//! ## Request Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     ApiClient Request Pipeline                          │
//! │                                                                         │
//! │  endpoint wrapper (companies/products/...)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  decorate: Authorization: Bearer <token>   (when configured)           │
//! │            x-request-id: <uuid v4>         (correlation)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  send ──► 2xx ──► decode typed DTO                                     │
//! │       └─► 401 ──► ClientError::Unauthorized                            │
//! │       └─► other ─► ClientError::Status { status, message }             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The bearer token is injected on every request the same way the previous
//! client stack did it with an interceptor; 401 is surfaced as its own
//! variant so the app layer can drop the stored token.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::companies::CompaniesApi;
use crate::error::{ClientError, ClientResult};
use crate::inventory::InventoryApi;
use crate::mailer::MailerApi;
use crate::products::ProductsApi;

/// How much backend error body to keep in a [`ClientError::Status`] message.
const STATUS_MESSAGE_LIMIT: usize = 200;

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend base URL.
    pub base_url: String,
    /// Bearer token attached to every request, when present.
    pub bearer_token: Option<String>,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            bearer_token: None,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// REST client for the Kardex backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Creates a client from configuration.
    pub fn new(config: ApiConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()?;

        Ok(ApiClient { http, config })
    }

    /// Creates a client against `base_url` with default timeouts.
    pub fn for_base_url(base_url: impl Into<String>) -> ClientResult<Self> {
        ApiClient::new(ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        })
    }

    /// The configured backend base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // =========================================================================
    // Endpoint Accessors
    // =========================================================================

    /// Company endpoints (`/companies`).
    pub fn companies(&self) -> CompaniesApi<'_> {
        CompaniesApi::new(self)
    }

    /// Product endpoints (`/products`).
    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    /// Inventory endpoints (`/inventory`).
    pub fn inventory(&self) -> InventoryApi<'_> {
        InventoryApi::new(self)
    }

    /// Report dispatch endpoint (`/api/send-pdf`).
    pub fn mailer(&self) -> MailerApi<'_> {
        MailerApi::new(self)
    }

    // =========================================================================
    // Transport Helpers
    // =========================================================================

    /// Joins the base URL and a path with exactly one slash between them.
    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Attaches auth and correlation headers.
    fn decorate(&self, req: RequestBuilder) -> RequestBuilder {
        let req = req.header("x-request-id", Uuid::new_v4().to_string());
        match &self.config.bearer_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Sends a decorated request and maps the status line.
    async fn execute(&self, method: &str, path: &str, req: RequestBuilder) -> ClientResult<Response> {
        debug!(method, path, "backend request");
        let response = self.decorate(req).send().await?;

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            status => {
                let mut message = response.text().await.unwrap_or_default();
                message.truncate(STATUS_MESSAGE_LIMIT);
                Err(ClientError::Status {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    /// Decodes a successful response body into a typed DTO.
    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.execute("GET", path, self.http.get(self.url(path))).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .execute("POST", path, self.http.post(self.url(path)).json(body))
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .execute("PUT", path, self.http.put(self.url(path)).json(body))
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self
            .execute("PATCH", path, self.http.patch(self.url(path)).json(body))
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ClientResult<()> {
        self.execute("DELETE", path, self.http.delete(self.url(path)))
            .await?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining_normalizes_slashes() {
        let client = ApiClient::for_base_url("http://localhost:8000/").unwrap();
        assert_eq!(client.url("/companies"), "http://localhost:8000/companies");
        assert_eq!(client.url("companies"), "http://localhost:8000/companies");

        let client = ApiClient::for_base_url("http://localhost:8000").unwrap();
        assert_eq!(
            client.url("/products/SKU-001/prices"),
            "http://localhost:8000/products/SKU-001/prices"
        );
    }

    #[test]
    fn test_default_config_points_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert!(config.bearer_token.is_none());
    }
}
