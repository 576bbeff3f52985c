//! # App Error Type
//!
//! Unified error type for backoffice operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Error Flow in the Backoffice                        │
//! │                                                                         │
//! │  Operation (ops/*)                                                     │
//! │  Result<T, AppError>                                                   │
//! │       │                                                                 │
//! │       ├── ValidationError ──► VALIDATION_ERROR (fix the input)         │
//! │       ├── CoreError       ──► CONVERSION_UNAVAILABLE / NOT_FOUND       │
//! │       ├── ClientError     ──► UNAUTHORIZED / BACKEND_ERROR             │
//! │       └── dispatch refusal ─► DISPATCH_ERROR                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  main prints: [CODE] message, exits non-zero                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both a machine-readable `code` and a human-readable `message` are kept so
//! scripted callers can branch without parsing prose.

use serde::Serialize;

use kardex_client::ClientError;
use kardex_core::{CoreError, ValidationError};

/// Error returned from backoffice operations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for operation outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// No usable exchange rate for the requested quote
    ConversionUnavailable,

    /// The backend rejected our credentials
    Unauthorized,

    /// The backend or the network failed
    BackendError,

    /// The send endpoint refused the dispatch
    DispatchError,

    /// Anything unexpected
    Internal,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(ErrorCode::NotFound, format!("{resource} not found: {id}"))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a dispatch error.
    pub fn dispatch(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::DispatchError, message)
    }
}

/// Converts client errors to app errors.
impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Unauthorized => AppError::new(
                ErrorCode::Unauthorized,
                "Backend rejected credentials, log in again",
            ),
            ClientError::Status { status: 404, message } => {
                AppError::new(ErrorCode::NotFound, message)
            }
            ClientError::Status { status, message } => AppError::new(
                ErrorCode::BackendError,
                format!("Backend returned {status}: {message}"),
            ),
            ClientError::Transport(e) => {
                tracing::error!("transport failure: {e}");
                AppError::new(ErrorCode::BackendError, "Could not reach the backend")
            }
            ClientError::Decode(e) => {
                tracing::error!("response decode failure: {e}");
                AppError::new(ErrorCode::BackendError, "Backend sent an unexpected response")
            }
            ClientError::Config(e) => AppError::new(ErrorCode::Internal, e),
        }
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CompanyNotFound(nit) => AppError::not_found("Company", &nit),
            CoreError::ProductNotFound(code) => AppError::not_found("Product", &code),
            CoreError::ConversionUnavailable { currency } => AppError::new(
                ErrorCode::ConversionUnavailable,
                format!("No usable exchange rate for {currency}"),
            ),
            CoreError::Validation(e) => AppError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors directly (pre-network checks).
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_maps_to_its_own_code() {
        let err: AppError = ClientError::Unauthorized.into();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[test]
    fn test_backend_404_maps_to_not_found() {
        let err: AppError = ClientError::Status {
            status: 404,
            message: "no such product".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_conversion_unavailable_maps_through() {
        let err: AppError = CoreError::ConversionUnavailable {
            currency: "ARS".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ConversionUnavailable);
        assert!(err.message.contains("ARS"));
    }
}
