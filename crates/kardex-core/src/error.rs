//! # Error Types
//!
//! Domain-specific error types for kardex-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kardex-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  kardex-client errors (separate crate)                                 │
//! │  └── ClientError      - Transport / backend failures                   │
//! │                                                                         │
//! │  backoffice errors (in app)                                            │
//! │  └── AppError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ClientError → AppError → Operator │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is Deliberately NOT an Error
//! A missing or stale exchange rate is an expected, recoverable data gap.
//! The price converter signals it by returning an empty (or narrower) quote,
//! and the fingerprint function never fails at all. Only genuine rule
//! violations become error values.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Company cannot be found.
    #[error("Company not found: {0}")]
    CompanyNotFound(String),

    /// Product cannot be found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A price quote could not be produced for the product being registered.
    ///
    /// ## When This Occurs
    /// - The base currency has no entry in the active rate table
    /// - The base rate is zero or negative (corrupt upstream data)
    /// - The base price itself is not a positive finite number
    ///
    /// ## User Workflow
    /// ```text
    /// Register Product (base 100 ARS)
    ///      │
    ///      ▼
    /// Rate table has no ARS entry
    ///      │
    ///      ▼
    /// ConversionUnavailable { currency: "ARS" }
    ///      │
    ///      ▼
    /// UI shows: "No exchange rate for ARS, try again later"
    /// ```
    #[error("No usable exchange rate for base currency {currency}")]
    ConversionUnavailable { currency: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before any network call runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed NIT, malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ConversionUnavailable {
            currency: "ARS".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No usable exchange rate for base currency ARS"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "nit".to_string(),
        };
        assert_eq!(err.to_string(), "nit is required");

        let err = ValidationError::TooShort {
            field: "name".to_string(),
            min: 2,
        };
        assert_eq!(err.to_string(), "name must be at least 2 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "code".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
