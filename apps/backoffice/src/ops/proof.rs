//! # Proof of Existence
//!
//! The wallet-signature panel as an operation: produce the exact message a
//! wallet should sign for a snapshot, and check a returned signature through
//! the external recovery seam.
//!
//! Wallet interaction itself (account selection, the signing prompt) happens
//! outside this process; the CLI prints the challenge and accepts the
//! signature material back.

use serde::Serialize;
use tracing::info;

use crate::error::AppError;
use crate::ops::inventory::InventoryReport;
use kardex_core::proof::{signing_message, AddressRecovery, ProofRecord};

/// What a wallet needs to produce a proof: the fingerprint and the message
/// derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct ProofChallenge {
    pub fingerprint: String,
    pub message: String,
}

/// Builds the signing challenge for an assembled report.
pub fn challenge_for(report: &InventoryReport) -> ProofChallenge {
    ProofChallenge {
        fingerprint: report.fingerprint.clone(),
        message: signing_message(&report.fingerprint),
    }
}

/// Captures signature material returned by a wallet and verifies it.
///
/// Returns the record together with its verification verdict; an unverifiable
/// signature is still worth keeping (the operator may retry with a different
/// recovery utility), so this is not an error path.
pub fn capture_and_verify(
    fingerprint: &str,
    address: &str,
    signature: &str,
    recovery: &dyn AddressRecovery,
) -> Result<(ProofRecord, bool), AppError> {
    if fingerprint.is_empty() || address.is_empty() || signature.is_empty() {
        return Err(AppError::validation(
            "fingerprint, address and signature are all required",
        ));
    }

    let record = ProofRecord::new(fingerprint, address, signature);
    let verified = record.verify(recovery);

    info!(
        address = %record.address,
        verified,
        "proof captured"
    );

    Ok((record, verified))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kardex_core::proof::RecoveryError;

    struct FakeRecovery(&'static str);

    impl AddressRecovery for FakeRecovery {
        fn recover(&self, _message: &str, _signature: &str) -> Result<String, RecoveryError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_capture_and_verify_matching_address() {
        let (record, verified) =
            capture_and_verify("poe-1a2b3c4d-42", "0xABC", "0xsig", &FakeRecovery("0xabc"))
                .unwrap();
        assert!(verified);
        assert_eq!(record.fingerprint, "poe-1a2b3c4d-42");
    }

    #[test]
    fn test_capture_and_verify_mismatch() {
        let (_, verified) =
            capture_and_verify("poe-1a2b3c4d-42", "0xABC", "0xsig", &FakeRecovery("0xdef"))
                .unwrap();
        assert!(!verified);
    }

    #[test]
    fn test_capture_rejects_empty_material() {
        let result = capture_and_verify("", "0xABC", "0xsig", &FakeRecovery("0xabc"));
        assert!(result.is_err());
    }
}
