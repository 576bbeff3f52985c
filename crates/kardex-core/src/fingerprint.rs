//! # Inventory Fingerprint Module
//!
//! Deterministic short fingerprints for inventory snapshots.
//!
//! ## What the Fingerprint Is (and Is Not)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  poe-1a2b3c4d-1874                                                      │
//! │   │     │       │                                                       │
//! │   │     │       └── byte length of the serialized snapshot              │
//! │   │     └── 32-bit checksum, 8 lowercase hex digits                     │
//! │   └── fixed tag ("proof of existence")                                  │
//! │                                                                         │
//! │  Uses: display, copy-to-clipboard, QR payload, wallet signing message   │
//! │                                                                         │
//! │  NOT a security primitive. The checksum is a synchronous 32-bit mix;    │
//! │  collisions across distinct snapshots are possible and only mitigated  │
//! │  by the length suffix. Never present it as cryptographically secure.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Contract
//! Identical `(selector, rows)` in identical order always fingerprint
//! identically. The function serializes whatever it is given and does NOT
//! re-sort anything: stable field and row ordering is the caller's job.
//! Rust struct serialization is declaration-ordered, which satisfies that
//! for the types in this crate.
//!
//! ## Compatibility
//! The checksum mix is kept exactly as originally issued fingerprints used
//! it. Swapping in a real content-addressable hash would make every
//! previously displayed, printed, or signed fingerprint non-reproducible;
//! that is a versioning decision, not a cleanup.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::types::InventoryItem;
use crate::ALL_COMPANIES;

// =============================================================================
// Checksum
// =============================================================================

/// FNV-1a offset basis, the accumulator's starting value.
const OFFSET_BASIS: u32 = 0x811c_9dc5;

/// 32-bit rolling checksum over a byte sequence.
///
/// FNV-1a-style: XOR each byte into the accumulator, then apply the
/// multiply-by-prime step expressed as shifted additions, keeping only the
/// low 32 bits at every step. Wrapping u32 arithmetic reproduces the exact
/// sequence of values the original 32-bit implementation produced.
pub fn checksum32(bytes: &[u8]) -> u32 {
    let mut acc = OFFSET_BASIS;
    for &byte in bytes {
        acc ^= u32::from(byte);
        acc = acc
            .wrapping_add(acc << 1)
            .wrapping_add(acc << 4)
            .wrapping_add(acc << 7)
            .wrapping_add(acc << 8)
            .wrapping_add(acc << 24);
    }
    acc
}

// =============================================================================
// Fingerprint
// =============================================================================

/// Fingerprints any serializable payload.
///
/// The payload is serialized to compact JSON, encoded as UTF-8, checksummed,
/// and formatted as `poe-<8 hex digits>-<byte length>`.
///
/// This function never fails: a payload that cannot be serialized (which no
/// type in this crate can produce) degrades to fingerprinting the empty
/// string rather than erroring.
pub fn fingerprint<T: Serialize>(payload: &T) -> String {
    let json = serde_json::to_string(payload).unwrap_or_default();
    let bytes = json.as_bytes();
    format!("poe-{:08x}-{}", checksum32(bytes), bytes.len())
}

// =============================================================================
// Company Scope
// =============================================================================

/// The scoping applied to an inventory snapshot: one company, or all of them.
///
/// Serializes as the bare NIT string, or the `"all"` sentinel. The sentinel
/// spelling is part of every unscoped fingerprint, so it is fixed by
/// [`ALL_COMPANIES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyScope {
    /// Every company.
    All,
    /// A single company, by NIT.
    Nit(String),
}

impl CompanyScope {
    /// Builds a scope from a raw selector string. Empty input and the
    /// sentinel both mean "all companies", matching the selector widget's
    /// unselected and explicit-all states.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == ALL_COMPANIES {
            CompanyScope::All
        } else {
            CompanyScope::Nit(raw.to_string())
        }
    }

    /// Whether an inventory row falls inside this scope.
    pub fn matches(&self, item: &InventoryItem) -> bool {
        match self {
            CompanyScope::All => true,
            CompanyScope::Nit(nit) => item.company_nit == *nit,
        }
    }
}

impl Serialize for CompanyScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CompanyScope::All => serializer.serialize_str(ALL_COMPANIES),
            CompanyScope::Nit(nit) => serializer.serialize_str(nit),
        }
    }
}

impl<'de> Deserialize<'de> for CompanyScope {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(CompanyScope::parse(&raw))
    }
}

impl fmt::Display for CompanyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompanyScope::All => write!(f, "{}", ALL_COMPANIES),
            CompanyScope::Nit(nit) => write!(f, "{}", nit),
        }
    }
}

// =============================================================================
// Inventory Snapshot
// =============================================================================

/// The fingerprintable view of an inventory: a selector plus the rows it
/// scoped, in backend order.
///
/// Field order here IS the canonical serialization order; do not reorder
/// these fields without accepting that every fingerprint changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    /// The scoping that produced `rows`.
    pub selector: CompanyScope,

    /// The scoped rows, in the order the backend returned them.
    pub rows: Vec<InventoryItem>,
}

impl InventorySnapshot {
    /// Scopes `rows` with `selector`, preserving their relative order.
    pub fn scoped(selector: CompanyScope, rows: &[InventoryItem]) -> Self {
        let rows = rows
            .iter()
            .filter(|item| selector.matches(item))
            .cloned()
            .collect();
        InventorySnapshot { selector, rows }
    }

    /// Fingerprints this snapshot.
    pub fn fingerprint(&self) -> String {
        fingerprint(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, code: &str, nit: &str, qty: i64) -> InventoryItem {
        InventoryItem {
            id,
            product_code: code.to_string(),
            product_name: format!("Product {code}"),
            price_cop: 400000.0,
            price_usd: 100.0,
            price_eur: 85.0,
            company_nit: nit.to_string(),
            company_name: format!("Company {nit}"),
            quantity: qty,
        }
    }

    fn snapshot() -> InventorySnapshot {
        InventorySnapshot {
            selector: CompanyScope::All,
            rows: vec![item(1, "SKU-001", "900-1", 5), item(2, "SKU-002", "900-2", 9)],
        }
    }

    #[test]
    fn test_checksum_of_empty_input_is_offset_basis() {
        assert_eq!(checksum32(b""), OFFSET_BASIS);
    }

    #[test]
    fn test_checksum_is_order_sensitive() {
        assert_ne!(checksum32(b"ab"), checksum32(b"ba"));
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let s = snapshot();
        assert_eq!(s.fingerprint(), s.fingerprint());
        // A structurally equal clone fingerprints identically too
        assert_eq!(s.clone().fingerprint(), s.fingerprint());
    }

    #[test]
    fn test_fingerprint_format() {
        let fp = snapshot().fingerprint();
        let parts: Vec<&str> = fp.splitn(3, '-').collect();

        assert_eq!(parts[0], "poe");
        assert_eq!(parts[1].len(), 8);
        assert!(parts[1]
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_length_suffix_is_serialized_byte_length() {
        let s = snapshot();
        let json = serde_json::to_string(&s).unwrap();
        let fp = s.fingerprint();
        assert!(fp.ends_with(&format!("-{}", json.len())));
    }

    #[test]
    fn test_single_character_change_changes_fingerprint() {
        let a = snapshot();
        let mut b = a.clone();
        b.rows[1].product_name.replace_range(0..1, "p");
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_row_order_changes_fingerprint() {
        let a = snapshot();
        let mut b = a.clone();
        b.rows.reverse();
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_selector_changes_fingerprint() {
        let a = snapshot();
        let b = InventorySnapshot {
            selector: CompanyScope::Nit("900-1".to_string()),
            rows: a.rows.clone(),
        };
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_quantity_change_changes_fingerprint() {
        let a = snapshot();
        let mut b = a.clone();
        b.rows[0].quantity += 1;
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_scope_parse_sentinels() {
        assert_eq!(CompanyScope::parse(""), CompanyScope::All);
        assert_eq!(CompanyScope::parse("all"), CompanyScope::All);
        assert_eq!(
            CompanyScope::parse("900-1"),
            CompanyScope::Nit("900-1".to_string())
        );
    }

    #[test]
    fn test_scope_serializes_to_sentinel_or_nit() {
        assert_eq!(
            serde_json::to_string(&CompanyScope::All).unwrap(),
            "\"all\""
        );
        assert_eq!(
            serde_json::to_string(&CompanyScope::Nit("900-1".into())).unwrap(),
            "\"900-1\""
        );
    }

    #[test]
    fn test_scoped_filters_and_preserves_order() {
        let rows = vec![
            item(1, "SKU-001", "900-1", 5),
            item(2, "SKU-002", "900-2", 9),
            item(3, "SKU-003", "900-1", 2),
        ];

        let all = InventorySnapshot::scoped(CompanyScope::All, &rows);
        assert_eq!(all.rows.len(), 3);

        let one = InventorySnapshot::scoped(CompanyScope::Nit("900-1".into()), &rows);
        assert_eq!(one.rows.len(), 2);
        assert_eq!(one.rows[0].id, 1);
        assert_eq!(one.rows[1].id, 3);
    }

    #[test]
    fn test_fingerprint_accepts_arbitrary_payloads() {
        // Any Serialize value is fingerprintable, not just snapshots
        let fp = fingerprint(&serde_json::json!({ "anything": [1, 2, 3] }));
        assert!(fp.starts_with("poe-"));
    }
}
