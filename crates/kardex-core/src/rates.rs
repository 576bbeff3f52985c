//! # Exchange-Rate Tables
//!
//! The rate table every price quote is computed against.
//!
//! ## Anchoring
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     How the Table Is Anchored                           │
//! │                                                                         │
//! │  reference = "USD"                                                     │
//! │  rates = { "USD": 1.0, "EUR": 0.92, "COP": 4100.0, ... }              │
//! │                                                                         │
//! │  Meaning: 1 unit of the reference currency buys `rate` units of the    │
//! │  keyed currency. Every cross-currency conversion goes through the      │
//! │  reference:  base ──(÷ rate[base])──► reference ──(× rate[target])──►  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! A table is fetched once per session (or cached briefly by the provider),
//! treated as immutable after construction, and replaced wholesale by the
//! next fetch or by [`RateTable::fallback`] when the fetch fails. The rates
//! map is keyed by plain strings because the upstream feed may carry
//! currencies outside the supported set; the converter only reads the keys
//! it cares about.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::currency::Currency;

/// Fixed fallback rates, anchored to USD.
///
/// Approximations are fine here: the fallback exists so the converter never
/// degrades to "no rates at all" when the live feed is unreachable, not to
/// be accurate.
const FALLBACK_RATES: [(Currency, f64); 6] = [
    (Currency::Usd, 1.0),
    (Currency::Eur, 0.92),
    (Currency::Cop, 4100.0),
    (Currency::Mxn, 18.5),
    (Currency::Ars, 1350.0),
    (Currency::Brl, 5.4),
];

/// An exchange-rate table anchored to one reference currency.
///
/// ## Invariant
/// `rates[reference] == 1.0`. Upstream feeds sometimes omit the reference
/// currency from its own table; [`RateTable::new`] inserts it defensively so
/// lookups never special-case the anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// Code of the currency all rates are expressed against.
    pub reference: String,

    /// Positive multipliers: 1 unit of `reference` = `rate` units of the key.
    pub rates: HashMap<String, f64>,

    /// When this table was obtained. Fallback tables get the construction
    /// time, which keeps provider freshness logic uniform.
    pub fetched_at: DateTime<Utc>,
}

impl RateTable {
    /// Builds a table from an upstream `(reference, rates)` pair, restoring
    /// the reference-rate invariant if the source omitted it.
    pub fn new(reference: impl Into<String>, rates: HashMap<String, f64>) -> Self {
        let reference = reference.into();
        let mut rates = rates;
        rates.entry(reference.clone()).or_insert(1.0);

        RateTable {
            reference,
            rates,
            fetched_at: Utc::now(),
        }
    }

    /// The static fallback table: USD-anchored, covering the full supported
    /// currency set.
    pub fn fallback() -> Self {
        let rates = FALLBACK_RATES
            .iter()
            .map(|(c, r)| (c.code().to_string(), *r))
            .collect();
        RateTable::new("USD", rates)
    }

    /// Returns the rate for `code` if it is present, finite, and positive.
    ///
    /// The reference currency always qualifies, implicitly at 1.0, even when
    /// a caller constructed the struct directly and skipped normalization.
    pub fn usable_rate(&self, code: &str) -> Option<f64> {
        if code == self.reference {
            return Some(1.0);
        }
        match self.rates.get(code) {
            Some(&r) if r.is_finite() && r > 0.0 => Some(r),
            _ => None,
        }
    }

    /// Whether `code` names the reference currency.
    pub fn is_reference(&self, code: &str) -> bool {
        code == self.reference
    }

    /// Age of the table relative to `now`.
    pub fn age(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.fetched_at
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, f64)]) -> RateTable {
        RateTable::new(
            "USD",
            entries.iter().map(|(c, r)| (c.to_string(), *r)).collect(),
        )
    }

    #[test]
    fn test_new_inserts_missing_reference_rate() {
        let t = table(&[("EUR", 0.85)]);
        assert_eq!(t.rates.get("USD"), Some(&1.0));
    }

    #[test]
    fn test_new_keeps_upstream_reference_rate() {
        // An upstream that ships its own anchor entry is left untouched,
        // even if it disagrees with 1.0 (garbage in, garbage visible).
        let t = table(&[("USD", 0.99), ("EUR", 0.85)]);
        assert_eq!(t.rates.get("USD"), Some(&0.99));
        // usable_rate still treats the reference as 1.0 by definition
        assert_eq!(t.usable_rate("USD"), Some(1.0));
    }

    #[test]
    fn test_usable_rate_filters_junk() {
        let t = table(&[("EUR", 0.85), ("COP", 0.0), ("MXN", -17.0), ("BRL", f64::NAN)]);
        assert_eq!(t.usable_rate("EUR"), Some(0.85));
        assert_eq!(t.usable_rate("COP"), None);
        assert_eq!(t.usable_rate("MXN"), None);
        assert_eq!(t.usable_rate("BRL"), None);
        assert_eq!(t.usable_rate("ARS"), None);
    }

    #[test]
    fn test_fallback_covers_supported_set() {
        let t = RateTable::fallback();
        assert_eq!(t.reference, "USD");
        for c in Currency::ALL {
            assert!(
                t.usable_rate(c.code()).is_some(),
                "fallback is missing {}",
                c.code()
            );
        }
        assert_eq!(t.rates.get("USD"), Some(&1.0));
    }
}
