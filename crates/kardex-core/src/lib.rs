//! # kardex-core: Pure Business Logic for Kardex
//!
//! This crate is the **heart** of Kardex. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Kardex Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/backoffice (CLI)                           │   │
//! │  │    register product ──► inventory report ──► proof message      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 kardex-client (REST + rates)                    │   │
//! │  │    companies, products, inventory, rates, report dispatch       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kardex-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌───────────┐ ┌───────────┐        │   │
//! │  │   │  types   │ │ pricing  │ │fingerprint│ │ validation│        │   │
//! │  │   │ Company  │ │ RateTable│ │ Snapshot  │ │   rules   │        │   │
//! │  │   │ Product  │ │  Quote   │ │ Checksum  │ │  checks   │        │   │
//! │  │   └──────────┘ └──────────┘ └───────────┘ └───────────┘        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Company, Product, InventoryItem)
//! - [`currency`] - The closed set of supported currencies
//! - [`rates`] - Exchange-rate tables and the static fallback
//! - [`pricing`] - Multi-currency price conversion
//! - [`fingerprint`] - Inventory snapshot fingerprinting
//! - [`proof`] - Proof-of-existence message and verification seam
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, wallet access is FORBIDDEN here
//! 3. **Empty Means Unavailable**: missing exchange rates produce empty or
//!    narrower results, never errors (the caller decides how to surface that)
//! 4. **Explicit Errors**: validation failures are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use kardex_core::currency::Currency;
//! use kardex_core::pricing::compute_prices;
//! use kardex_core::rates::RateTable;
//!
//! let table = RateTable::fallback();
//!
//! // Quote 100 USD across the supported currency set
//! let quote = compute_prices(100.0, Currency::Usd, &table);
//! assert_eq!(quote.get(&Currency::Usd), Some(&100.0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod error;
pub mod fingerprint;
pub mod pricing;
pub mod proof;
pub mod rates;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kardex_core::Currency` instead of
// `use kardex_core::currency::Currency`

pub use currency::Currency;
pub use error::{CoreError, CoreResult, ValidationError};
pub use fingerprint::{fingerprint, CompanyScope, InventorySnapshot};
pub use pricing::compute_prices;
pub use rates::RateTable;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sentinel NIT meaning "every company" when scoping an inventory snapshot.
///
/// ## Why a constant?
/// The sentinel travels inside serialized snapshots, so its spelling is part
/// of the fingerprint input. Changing it silently would change every
/// fingerprint computed for unscoped inventories.
pub const ALL_COMPANIES: &str = "all";

/// Maximum length accepted for free-form product features text.
///
/// ## Business Reason
/// Keeps report rows printable and protects the PDF layout from runaway
/// descriptions. Can be made configurable per deployment later.
pub const MAX_FEATURES_LEN: usize = 2000;
