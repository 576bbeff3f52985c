//! # Supported Currencies
//!
//! The closed set of currencies Kardex quotes prices in.
//!
//! ## Why an Enum?
//! Rate tables arrive from upstream keyed by arbitrary strings, but the set
//! of currencies this system displays and stores is fixed. Making it a closed
//! enum turns "is this currency supported?" into a compile-time question and
//! keeps the price mapping keys well-typed end to end.
//!
//! The declaration order is the display order: quotes iterate `Currency::ALL`
//! and `BTreeMap<Currency, _>` keys sort the same way.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currency codes (ISO-4217-like, uppercase).
///
/// Ordering follows the display convention of the product screens:
/// dollar first, then the regional currencies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar - the reference currency of the upstream rate feed
    Usd,
    /// Euro
    Eur,
    /// Colombian Peso
    Cop,
    /// Mexican Peso
    Mxn,
    /// Argentine Peso
    Ars,
    /// Brazilian Real
    Brl,
}

impl Currency {
    /// Every supported currency, in display order.
    pub const ALL: [Currency; 6] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Cop,
        Currency::Mxn,
        Currency::Ars,
        Currency::Brl,
    ];

    /// Returns the uppercase ISO-4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Cop => "COP",
            Currency::Mxn => "MXN",
            Currency::Ars => "ARS",
            Currency::Brl => "BRL",
        }
    }

    /// Parses a code, case-insensitively.
    ///
    /// Returns `None` for anything outside the supported set. Callers that
    /// need an error value should map `None` through
    /// [`ValidationError::NotAllowed`](crate::error::ValidationError).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "COP" => Some(Currency::Cop),
            "MXN" => Some(Currency::Mxn),
            "ARS" => Some(Currency::Ars),
            "BRL" => Some(Currency::Brl),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for c in Currency::ALL {
            assert_eq!(Currency::from_code(c.code()), Some(c));
        }
    }

    #[test]
    fn test_from_code_is_case_insensitive() {
        assert_eq!(Currency::from_code("usd"), Some(Currency::Usd));
        assert_eq!(Currency::from_code("Cop"), Some(Currency::Cop));
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(Currency::from_code("GBP"), None);
        assert_eq!(Currency::from_code(""), None);
    }

    #[test]
    fn test_display_order_matches_all() {
        // BTreeMap keyed by Currency must iterate in display order
        let codes: Vec<&str> = Currency::ALL.iter().map(|c| c.code()).collect();
        assert_eq!(codes, ["USD", "EUR", "COP", "MXN", "ARS", "BRL"]);

        let mut sorted = Currency::ALL;
        sorted.sort();
        assert_eq!(sorted, Currency::ALL);
    }

    #[test]
    fn test_serde_uses_uppercase_codes() {
        let json = serde_json::to_string(&Currency::Cop).unwrap();
        assert_eq!(json, "\"COP\"");
        let back: Currency = serde_json::from_str("\"BRL\"").unwrap();
        assert_eq!(back, Currency::Brl);
    }
}
