//! # kardex-client: REST Client for the Kardex Backend
//!
//! Typed access to the backend that owns persistence, plus the exchange-rate
//! provider with its static fallback.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  apps/backoffice ──► kardex-client (THIS CRATE) ──► REST backend       │
//! │                              │                                          │
//! │                              └──► kardex-core (types, rate tables)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`http`] - the [`ApiClient`] transport: base URL, bearer auth,
//!   correlation ids, status mapping
//! - [`companies`] / [`products`] / [`inventory`] - endpoint wrappers
//! - [`rates`] - [`RatesProvider`]: fetch, brief cache, fallback-on-failure
//! - [`mailer`] - report dispatch through the backend's send endpoint
//! - [`error`] - [`ClientError`]
//!
//! ## Error Policy
//! Transport and backend failures become [`ClientError`] values. The one
//! deliberate exception is the rates path: a failed rate fetch is converted
//! into the static fallback table (with a warning), because the price
//! converter must never be left with no rates at all.

pub mod companies;
pub mod error;
pub mod http;
pub mod inventory;
pub mod mailer;
pub mod products;
pub mod rates;

pub use error::{ClientError, ClientResult};
pub use http::{ApiClient, ApiConfig};
pub use mailer::{DispatchOutcome, ReportDispatch, SendMethod};
pub use rates::RatesProvider;
