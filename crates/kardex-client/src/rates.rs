//! # Exchange-Rate Provider
//!
//! Fetches the USD-anchored rate table from the backend's rates proxy and
//! keeps the price converter supplied even when the feed is down.
//!
//! ## Behavior
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      RatesProvider Behavior                             │
//! │                                                                         │
//! │  current()                                                             │
//! │     │                                                                   │
//! │     ├─ cached table younger than TTL ──► return it                     │
//! │     │                                                                   │
//! │     └─ otherwise fetch /api/rates                                      │
//! │           ├─ ok   ──► normalize, cache, return                         │
//! │           └─ fail ──► warn + return the static fallback table          │
//! │                       (NOT cached: the next call retries the feed)     │
//! │                                                                         │
//! │  No request deduplication: concurrent refreshes may both fetch, and    │
//! │  the most recent result wins. That matches how rate data is used -     │
//! │  any fresh-enough table is as good as another.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Duration, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;
use kardex_core::RateTable;

/// Default cache TTL: 30 minutes, the staleness window the rate screens
/// always used.
pub const DEFAULT_TTL_SECS: i64 = 30 * 60;

/// Wire envelope of the rates proxy: `{ success, data: { base, rates } }`.
#[derive(Debug, Deserialize)]
struct RatesEnvelope {
    success: bool,
    data: Option<RatesPayload>,
}

/// The feed payload inside the envelope (exchangerate.host shape).
#[derive(Debug, Deserialize)]
struct RatesPayload {
    base: String,
    rates: HashMap<String, f64>,
}

/// Cached, fallback-guarded access to the exchange-rate table.
pub struct RatesProvider {
    client: ApiClient,
    ttl: Duration,
    cached: RwLock<Option<RateTable>>,
}

impl RatesProvider {
    /// Creates a provider with an explicit TTL in seconds.
    pub fn new(client: ApiClient, ttl_secs: i64) -> Self {
        RatesProvider {
            client,
            ttl: Duration::seconds(ttl_secs),
            cached: RwLock::new(None),
        }
    }

    /// Creates a provider with the default 30-minute TTL.
    pub fn with_default_ttl(client: ApiClient) -> Self {
        RatesProvider::new(client, DEFAULT_TTL_SECS)
    }

    /// Returns a usable rate table: the cached one while fresh, otherwise a
    /// fresh fetch, otherwise the static fallback.
    ///
    /// This never fails. Callers that must distinguish "live" from
    /// "fallback" can compare against `RateTable::fallback()`.
    pub async fn current(&self) -> RateTable {
        if let Some(table) = self.cached.read().await.as_ref() {
            if table.age(Utc::now()) < self.ttl {
                debug!(reference = %table.reference, "using cached rate table");
                return table.clone();
            }
        }
        self.refresh().await
    }

    /// Unconditionally re-fetches, bypassing the cache.
    pub async fn refresh(&self) -> RateTable {
        match self.fetch().await {
            Ok(table) => {
                debug!(
                    reference = %table.reference,
                    rates = table.rates.len(),
                    "fetched rate table"
                );
                *self.cached.write().await = Some(table.clone());
                table
            }
            Err(e) => {
                // A failed fetch must not poison the cache; the fallback is
                // returned but the next call retries the live feed.
                warn!(error = %e, "rate fetch failed, substituting static fallback table");
                RateTable::fallback()
            }
        }
    }

    async fn fetch(&self) -> ClientResult<RateTable> {
        let envelope: RatesEnvelope = self.client.get_json("/api/rates").await?;

        let payload = match envelope {
            RatesEnvelope {
                success: true,
                data: Some(payload),
            } => payload,
            _ => {
                return Err(ClientError::Decode(
                    "rates envelope reported failure".to_string(),
                ))
            }
        };

        Ok(RateTable::new(payload.base, payload.rates))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kardex_core::Currency;

    #[test]
    fn test_envelope_parses_feed_shape() {
        let raw = r#"{
            "success": true,
            "data": { "base": "USD", "rates": { "EUR": 0.85, "COP": 4000.0 } }
        }"#;

        let envelope: RatesEnvelope = serde_json::from_str(raw).unwrap();
        assert!(envelope.success);

        let payload = envelope.data.unwrap();
        let table = RateTable::new(payload.base, payload.rates);
        // Normalization restores the reference entry the feed omitted
        assert_eq!(table.usable_rate("USD"), Some(1.0));
        assert_eq!(table.usable_rate("EUR"), Some(0.85));
    }

    #[test]
    fn test_envelope_tolerates_missing_data() {
        let raw = r#"{ "success": false }"#;
        let envelope: RatesEnvelope = serde_json::from_str(raw).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_feed_substitutes_fallback() {
        // Port 9 (discard) refuses connections on any sane machine
        let client = ApiClient::for_base_url("http://127.0.0.1:9").unwrap();
        let provider = RatesProvider::with_default_ttl(client);

        let table = provider.current().await;
        assert_eq!(table.reference, "USD");
        for c in Currency::ALL {
            assert!(table.usable_rate(c.code()).is_some());
        }
    }
}
