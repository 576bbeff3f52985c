//! # Validation Module
//!
//! Input validation utilities for Kardex.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI argument parsing                                         │
//! │  ├── Type validation (numbers parse, flags exist)                      │
//! │  └── Immediate operator feedback                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                       │
//! │  ├── Runs before any network call                                      │
//! │  └── Turns shape assumptions into checked contracts                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend constraints (NOT NULL, UNIQUE, FKs)                  │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::currency::Currency;
use crate::error::ValidationError;
use crate::MAX_FEATURES_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Company Validators
// =============================================================================

/// Validates a company NIT (tax registration number).
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 20 characters
/// - Digits, with optional dash-separated check digit (e.g. `900123456-7`)
pub fn validate_nit(nit: &str) -> ValidationResult<()> {
    let nit = nit.trim();

    if nit.is_empty() {
        return Err(ValidationError::Required {
            field: "nit".to_string(),
        });
    }

    if nit.len() > 20 {
        return Err(ValidationError::TooLong {
            field: "nit".to_string(),
            max: 20,
        });
    }

    if !nit.chars().all(|c| c.is_ascii_digit() || c == '-') {
        return Err(ValidationError::InvalidFormat {
            field: "nit".to_string(),
            reason: "must contain only digits and dashes".to_string(),
        });
    }

    Ok(())
}

/// Validates a company name.
///
/// ## Rules
/// - Must be at least 2 characters
/// - Must be at most 200 characters
pub fn validate_company_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.len() < 2 {
        return Err(ValidationError::TooShort {
            field: "name".to_string(),
            min: 2,
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a product code.
///
/// ## Rules
/// - Must be at least 2 characters
/// - Must be at most 50 characters
/// - Alphanumeric, hyphens, underscores
pub fn validate_product_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.len() < 2 {
        return Err(ValidationError::TooShort {
            field: "code".to_string(),
            min: 2,
        });
    }

    if code.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: 50,
        });
    }

    if !code
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name (same bounds as company names).
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_company_name(name).map_err(|e| match e {
        ValidationError::TooShort { min, .. } => ValidationError::TooShort {
            field: "name".to_string(),
            min,
        },
        other => other,
    })
}

/// Validates the free-form features text.
///
/// ## Rules
/// - Must be at least 3 characters
/// - Bounded by [`MAX_FEATURES_LEN`]
pub fn validate_features(features: &str) -> ValidationResult<()> {
    let features = features.trim();

    if features.len() < 3 {
        return Err(ValidationError::TooShort {
            field: "features".to_string(),
            min: 3,
        });
    }

    if features.len() > MAX_FEATURES_LEN {
        return Err(ValidationError::TooLong {
            field: "features".to_string(),
            max: MAX_FEATURES_LEN,
        });
    }

    Ok(())
}

/// Validates a base price before quoting.
///
/// The converter itself tolerates bad input by returning an empty quote;
/// this validator exists so registration can tell the operator WHY instead
/// of silently producing nothing.
pub fn validate_base_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "base_price".to_string(),
        });
    }
    Ok(())
}

/// Validates a currency code against the supported set.
pub fn validate_currency(code: &str) -> ValidationResult<Currency> {
    Currency::from_code(code).ok_or_else(|| ValidationError::NotAllowed {
        field: "currency".to_string(),
        allowed: Currency::ALL.iter().map(|c| c.code().to_string()).collect(),
    })
}

// =============================================================================
// Dispatch Validators
// =============================================================================

/// Validates a recipient email address.
///
/// ## Rules
/// Shape check only (`local@domain.tld`); deliverability is the mail
/// provider's problem.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let invalid = || ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: "expected local@domain.tld".to_string(),
    };

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.ends_with('.') {
        return Err(invalid());
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_nit() {
        assert!(validate_nit("900123456-7").is_ok());
        assert!(validate_nit("800000000").is_ok());
        assert!(validate_nit("").is_err());
        assert!(validate_nit("NIT 900").is_err());
        assert!(validate_nit("900123456789012345678-9").is_err());
    }

    #[test]
    fn test_validate_product_code() {
        assert!(validate_product_code("SKU-001").is_ok());
        assert!(validate_product_code("A").is_err());
        assert!(validate_product_code("SKU 001").is_err());
    }

    #[test]
    fn test_validate_names() {
        assert!(validate_company_name("Acme Ltda").is_ok());
        assert!(validate_company_name("A").is_err());
        assert!(validate_product_name("Producto X").is_ok());
        assert!(validate_product_name("X").is_err());
    }

    #[test]
    fn test_validate_features() {
        assert!(validate_features("Detalle y especificaciones").is_ok());
        assert!(validate_features("ab").is_err());
        assert!(validate_features(&"x".repeat(MAX_FEATURES_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_base_price() {
        assert!(validate_base_price(100.0).is_ok());
        assert!(validate_base_price(0.0).is_err());
        assert!(validate_base_price(-5.0).is_err());
        assert!(validate_base_price(f64::NAN).is_err());
        assert!(validate_base_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_currency() {
        assert_eq!(validate_currency("usd").unwrap(), Currency::Usd);
        assert!(validate_currency("GBP").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("destinatario@correo.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@nodot").is_err());
        assert!(validate_email("user@dot.").is_err());
    }
}
