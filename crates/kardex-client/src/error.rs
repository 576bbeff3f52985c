//! # Client Error Types
//!
//! Transport and backend failures for kardex-client.
//!
//! ## Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  network unreachable / timeout        → Transport                       │
//! │  HTTP 401                             → Unauthorized                    │
//! │  any other non-2xx                    → Status { status, message }      │
//! │  2xx with an unparseable body         → Decode                          │
//! │  bad base URL / client construction   → Config                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Unauthorized` is split out because the caller reacts differently to it
//! (drop the stored token, ask the operator to log in again) than to a
//! generic backend failure.

use thiserror::Error;

/// Errors produced by the REST client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed (DNS, connect, timeout, TLS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend rejected our credentials (HTTP 401).
    #[error("authentication required")]
    Unauthorized,

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The body of a successful response did not match the expected schema.
    #[error("could not decode response body: {0}")]
    Decode(String),

    /// The client itself was misconfigured (unparseable base URL etc.).
    #[error("invalid client configuration: {0}")]
    Config(String),
}

/// Convenience type alias for Results with ClientError.
pub type ClientResult<T> = Result<T, ClientError>;
