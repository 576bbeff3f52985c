//! Backoffice configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. A `.env` file is honored in development (loaded by main before
//! this runs).

use std::env;
use std::time::Duration;

use kardex_client::{ApiClient, ApiConfig, ClientResult};

/// Backoffice configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend base URL.
    pub api_url: String,

    /// Bearer token for the backend, if the deployment requires one.
    pub api_token: Option<String>,

    /// Exchange-rate cache TTL in seconds.
    pub rates_ttl_secs: i64,

    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = AppConfig {
            api_url: env::var("KARDEX_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),

            api_token: env::var("KARDEX_API_TOKEN").ok().filter(|t| !t.is_empty()),

            rates_ttl_secs: env::var("KARDEX_RATES_TTL_SECS")
                .unwrap_or_else(|_| "1800".to_string()) // 30 minutes
                .parse()
                .map_err(|_| ConfigError::InvalidValue("KARDEX_RATES_TTL_SECS".to_string()))?,

            request_timeout_secs: env::var("KARDEX_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("KARDEX_REQUEST_TIMEOUT_SECS".to_string()))?,
        };

        if config.rates_ttl_secs < 0 {
            return Err(ConfigError::InvalidValue(
                "KARDEX_RATES_TTL_SECS".to_string(),
            ));
        }

        Ok(config)
    }

    /// Builds the API client this configuration describes.
    pub fn api_client(&self) -> ClientResult<ApiClient> {
        ApiClient::new(ApiConfig {
            base_url: self.api_url.clone(),
            bearer_token: self.api_token.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..ApiConfig::default()
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
