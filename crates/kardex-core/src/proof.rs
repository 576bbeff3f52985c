//! # Proof of Existence
//!
//! Binds a wallet signature to an inventory fingerprint.
//!
//! ## Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Proof-of-Existence Flow                              │
//! │                                                                         │
//! │  InventorySnapshot ──► fingerprint ──► "Inventario Hash: poe-..."      │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                              injected wallet signs the message          │
//! │                                              │                          │
//! │                                              ▼                          │
//! │         ProofRecord { fingerprint, address, signature }                 │
//! │                                              │                          │
//! │                                              ▼                          │
//! │   verify: recover address from (message, signature), compare to the    │
//! │   signing account (case-insensitive)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Boundary
//! This module owns exactly one string: the signing message. Wallets and
//! elliptic-curve recovery are external collaborators behind the
//! [`AddressRecovery`] seam; this crate never touches key material.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Prefix of the message handed to the wallet for signing.
///
/// The exact spelling (including the trailing space) is load-bearing:
/// re-verification recomputes this message from the fingerprint, and a
/// different prefix recovers a different address.
pub const SIGNING_PREFIX: &str = "Inventario Hash: ";

/// Builds the exact message string that gets signed and later re-verified.
pub fn signing_message(fingerprint: &str) -> String {
    format!("{SIGNING_PREFIX}{fingerprint}")
}

/// Failure inside the external recovery utility.
#[derive(Debug, Error)]
pub enum RecoveryError {
    /// The utility could not recover an address from the pair.
    #[error("signature recovery failed: {0}")]
    Recovery(String),
}

/// External seam for elliptic-curve signature recovery.
///
/// Implementations wrap whatever cryptographic utility the deployment uses.
/// Kardex only consumes the recovered address string.
pub trait AddressRecovery {
    /// Recovers the signing address from `(message, signature)`.
    fn recover(&self, message: &str, signature: &str) -> Result<String, RecoveryError>;
}

/// A signature bound to a fingerprint by some wallet account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofRecord {
    /// Record identity (not part of what was signed).
    pub id: Uuid,

    /// The fingerprint the wallet signed (via [`signing_message`]).
    pub fingerprint: String,

    /// Account that claims to have signed.
    pub address: String,

    /// The signature bytes as the wallet returned them (hex string).
    pub signature: String,

    /// When the signature was captured.
    pub signed_at: DateTime<Utc>,
}

impl ProofRecord {
    /// Captures a freshly produced signature.
    pub fn new(
        fingerprint: impl Into<String>,
        address: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        ProofRecord {
            id: Uuid::new_v4(),
            fingerprint: fingerprint.into(),
            address: address.into(),
            signature: signature.into(),
            signed_at: Utc::now(),
        }
    }

    /// Verifies this record through an external recovery utility.
    ///
    /// The recovered address must equal the claimed one, compared
    /// case-insensitively (addresses circulate in mixed checksum casings).
    /// Recovery failure verifies as `false` rather than erroring: a proof
    /// that cannot be checked is simply not proven.
    pub fn verify(&self, recovery: &dyn AddressRecovery) -> bool {
        let message = signing_message(&self.fingerprint);
        match recovery.recover(&message, &self.signature) {
            Ok(recovered) => recovered.eq_ignore_ascii_case(&self.address),
            Err(_) => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Fake recovery utility: "recovers" whatever address it was built with,
    /// or fails when built with `None`.
    struct FakeRecovery(Option<String>);

    impl AddressRecovery for FakeRecovery {
        fn recover(&self, _message: &str, _signature: &str) -> Result<String, RecoveryError> {
            self.0
                .clone()
                .ok_or_else(|| RecoveryError::Recovery("bad signature".to_string()))
        }
    }

    #[test]
    fn test_signing_message_exact_shape() {
        assert_eq!(
            signing_message("poe-1a2b3c4d-42"),
            "Inventario Hash: poe-1a2b3c4d-42"
        );
    }

    #[test]
    fn test_verify_matching_address() {
        let record = ProofRecord::new("poe-1a2b3c4d-42", "0xAbC123", "0xsig");
        let recovery = FakeRecovery(Some("0xabc123".to_string()));
        assert!(record.verify(&recovery));
    }

    #[test]
    fn test_verify_mismatched_address() {
        let record = ProofRecord::new("poe-1a2b3c4d-42", "0xAbC123", "0xsig");
        let recovery = FakeRecovery(Some("0xdeadbeef".to_string()));
        assert!(!record.verify(&recovery));
    }

    #[test]
    fn test_recovery_failure_is_not_verified() {
        let record = ProofRecord::new("poe-1a2b3c4d-42", "0xAbC123", "0xsig");
        let recovery = FakeRecovery(None);
        assert!(!record.verify(&recovery));
    }
}
