//! # Price Conversion Module
//!
//! Derives a multi-currency price quote from a base price and the active
//! exchange-rate table.
//!
//! ## How a Quote Is Built
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TWO-HOP CONVERSION THROUGH THE REFERENCE CURRENCY                      │
//! │                                                                         │
//! │  base 100 EUR, table anchored to USD, rate[EUR] = 0.85                 │
//! │                                                                         │
//! │  hop 1:  100 EUR ÷ 0.85        = 117.647... USD   (into reference)     │
//! │  hop 2:  117.647... × rate[c]  = amount in c      (out of reference)   │
//! │                                                                         │
//! │  Every supported currency with a usable rate gets hop 2; the           │
//! │  reference currency itself qualifies implicitly at rate 1.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Asymmetry (load-bearing)
//! A missing or non-positive rate for the BASE currency invalidates the whole
//! quote: the function returns an empty mapping. A missing rate for a TARGET
//! currency only omits that one entry; the others still compute. Neither case
//! is an error value. Callers must treat an empty result as "conversion
//! unavailable" and must never confuse an omitted currency with a computed
//! zero - omitted entries are simply absent, zero is never written.
//!
//! ## Rounding
//! Amounts are rounded to 2 decimals on the cents boundary: multiply by 100,
//! round half away from zero, divide by 100. This matches how the stored
//! price columns and every displayed figure behave.
//!
//! ## Usage
//! ```rust
//! use kardex_core::currency::Currency;
//! use kardex_core::pricing::compute_prices;
//! use kardex_core::rates::RateTable;
//!
//! let quote = compute_prices(100.0, Currency::Usd, &RateTable::fallback());
//! assert_eq!(quote.get(&Currency::Usd), Some(&100.0));
//! ```

use std::collections::BTreeMap;

use crate::currency::Currency;
use crate::rates::RateTable;

// =============================================================================
// Rounding
// =============================================================================

/// Rounds an amount to 2 decimals, half away from zero.
///
/// ## Example
/// ```rust
/// use kardex_core::pricing::round_to_cents;
///
/// assert_eq!(round_to_cents(117.647058), 117.65);
/// assert_eq!(round_to_cents(85.004), 85.0);
/// ```
#[inline]
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

// =============================================================================
// Quote Computation
// =============================================================================

/// Computes a price quote across the supported currency set.
///
/// ## Contract
/// - `base_price` must be a positive finite number; anything else yields an
///   empty mapping (not an error - "no quote available yet").
/// - `base_currency` must have a usable rate in `table`, unless it IS the
///   table's reference currency, which is always implicitly available at
///   rate 1. A base without a usable rate empties the whole quote.
/// - Each supported currency with a usable positive rate receives an entry
///   rounded to 2 decimals. Currencies without one are silently omitted,
///   never zero-filled.
///
/// ## Example
/// ```rust
/// use std::collections::HashMap;
/// use kardex_core::currency::Currency;
/// use kardex_core::pricing::compute_prices;
/// use kardex_core::rates::RateTable;
///
/// let table = RateTable::new(
///     "USD",
///     HashMap::from([("EUR".to_string(), 0.85), ("COP".to_string(), 4000.0)]),
/// );
///
/// let quote = compute_prices(100.0, Currency::Usd, &table);
/// assert_eq!(quote.get(&Currency::Eur), Some(&85.0));
/// assert_eq!(quote.get(&Currency::Cop), Some(&400000.0));
/// // MXN/ARS/BRL have no rate in this table: omitted, not zero
/// assert_eq!(quote.get(&Currency::Mxn), None);
/// ```
pub fn compute_prices(
    base_price: f64,
    base_currency: Currency,
    table: &RateTable,
) -> BTreeMap<Currency, f64> {
    let mut quote = BTreeMap::new();

    if !base_price.is_finite() || base_price <= 0.0 {
        return quote;
    }

    // Hop 1: into the reference currency. Identity when the base already is
    // the reference; otherwise divide by the base's rate. A base without a
    // usable rate is fatal to the whole quote.
    let price_in_reference = if table.is_reference(base_currency.code()) {
        base_price
    } else {
        match table.usable_rate(base_currency.code()) {
            Some(rate) => base_price / rate,
            None => return quote,
        }
    };

    // Hop 2: out of the reference currency, one entry per supported currency
    // that has a usable rate (the reference qualifies implicitly at 1.0).
    for currency in Currency::ALL {
        if let Some(rate) = table.usable_rate(currency.code()) {
            quote.insert(currency, round_to_cents(price_in_reference * rate));
        }
    }

    quote
}

// =============================================================================
// Unit Tests
// =============================================================================
