//! # Report Dispatch
//!
//! Sends a rendered inventory report through the backend's send endpoint.
//! The backend forwards it to whatever mail provider the deployment uses;
//! that integration is not this crate's concern. What IS fixed here is the
//! wire contract: `{ to, subject, pdf_base64, method }` with the method
//! selector spelled exactly `REST` or `SOAP`.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::error::ClientResult;
use crate::http::ApiClient;

/// Which backend transport the send endpoint should use downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SendMethod {
    /// JSON POST to the mail provider.
    Rest,
    /// XML envelope to the legacy provider.
    Soap,
}

impl fmt::Display for SendMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendMethod::Rest => write!(f, "REST"),
            SendMethod::Soap => write!(f, "SOAP"),
        }
    }
}

/// A rendered report on its way to a recipient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDispatch {
    /// Recipient email address (validated upstream).
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// The rendered PDF, base64-encoded.
    pub pdf_base64: String,
    /// Downstream transport selector.
    pub method: SendMethod,
}

/// Outcome reported by the send endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct DispatchOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Dispatch operations against the backend.
#[derive(Debug)]
pub struct MailerApi<'a> {
    client: &'a ApiClient,
}

impl<'a> MailerApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        MailerApi { client }
    }

    /// Posts a dispatch request.
    pub async fn send_report(&self, dispatch: &ReportDispatch) -> ClientResult<DispatchOutcome> {
        let outcome: DispatchOutcome = self.client.post_json("/api/send-pdf", dispatch).await?;
        info!(
            to = %dispatch.to,
            method = %dispatch.method,
            success = outcome.success,
            "report dispatch requested"
        );
        Ok(outcome)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_method_wire_values() {
        assert_eq!(serde_json::to_string(&SendMethod::Rest).unwrap(), "\"REST\"");
        assert_eq!(serde_json::to_string(&SendMethod::Soap).unwrap(), "\"SOAP\"");

        let back: SendMethod = serde_json::from_str("\"SOAP\"").unwrap();
        assert_eq!(back, SendMethod::Soap);
    }

    #[test]
    fn test_dispatch_wire_shape() {
        let dispatch = ReportDispatch {
            to: "destinatario@correo.com".to_string(),
            subject: "Inventario adjunto".to_string(),
            pdf_base64: "JVBERi0=".to_string(),
            method: SendMethod::Rest,
        };

        let json = serde_json::to_value(&dispatch).unwrap();
        assert_eq!(json["to"], "destinatario@correo.com");
        assert_eq!(json["pdf_base64"], "JVBERi0=");
        assert_eq!(json["method"], "REST");
    }

    #[test]
    fn test_outcome_tolerates_missing_message() {
        let outcome: DispatchOutcome = serde_json::from_str(r#"{ "success": true }"#).unwrap();
        assert!(outcome.success);
        assert!(outcome.message.is_none());
    }
}
