//! # Inventory Reporting
//!
//! Builds the inventory report data and optionally dispatches a rendered
//! copy by email.
//!
//! ## Report Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Report Flow                               │
//! │                                                                         │
//! │  GET /inventory (backend order preserved)                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  scope rows by company selector ("all" or one NIT)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  fingerprint the (selector, rows) snapshot                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InventoryReport { title, company label, hash line, QR payload, rows } │
//! │       │                                                                 │
//! │       ├──► rendered to PDF / QR elsewhere (out of scope)               │
//! │       └──► dispatch: base64 attachment ──► POST /api/send-pdf          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The report carries everything the renderers consume; the rendering itself
//! (PDF layout, QR imaging) happens outside this system.

use base64::prelude::{Engine as _, BASE64_STANDARD};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::error::AppError;
use crate::state::CompanyStore;
use kardex_client::{ApiClient, DispatchOutcome, ReportDispatch, SendMethod};
use kardex_core::validation::validate_email;
use kardex_core::{CompanyScope, InventoryItem, InventorySnapshot};

/// Report title, kept verbatim from issued documents.
pub const REPORT_TITLE: &str = "Inventario por Empresa";

/// Subject line used for dispatched reports.
pub const DISPATCH_SUBJECT: &str = "Inventario adjunto";

/// Company label used when the report covers every company.
const ALL_COMPANIES_LABEL: &str = "Todas";

/// How many fingerprint characters the document header shows.
const HASH_DISPLAY_CHARS: usize = 20;

/// Everything a rendered inventory document displays.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryReport {
    /// Document title.
    pub title: String,

    /// Display name of the scoped company, or the all-companies label.
    pub company_label: String,

    /// Full snapshot fingerprint.
    pub fingerprint: String,

    /// Truncated header line. The label is kept verbatim from issued
    /// documents.
    pub hash_line: String,

    /// Payload for the QR image: the full fingerprint.
    pub qr_payload: String,

    /// When the report was assembled.
    pub generated_at: DateTime<Utc>,

    /// The scoped rows, in snapshot order.
    pub rows: Vec<InventoryItem>,
}

/// Fetches the inventory, scopes it, and assembles the report.
pub async fn build_report(
    client: &ApiClient,
    companies: &CompanyStore,
    scope: CompanyScope,
) -> Result<InventoryReport, AppError> {
    let rows = client.inventory().list().await?;
    let snapshot = InventorySnapshot::scoped(scope, &rows);
    Ok(assemble_report(companies, snapshot))
}

/// Pure assembly step, split out so it can be tested without a backend.
fn assemble_report(companies: &CompanyStore, snapshot: InventorySnapshot) -> InventoryReport {
    let fingerprint = snapshot.fingerprint();

    let company_label = match &snapshot.selector {
        CompanyScope::All => ALL_COMPANIES_LABEL.to_string(),
        CompanyScope::Nit(nit) => companies
            .find(nit)
            .map(|c| c.name)
            .unwrap_or_else(|| nit.clone()),
    };

    let shown: String = fingerprint.chars().take(HASH_DISPLAY_CHARS).collect();
    let hash_line = format!("Hash (SHA-256): {shown}...");

    info!(
        company = %company_label,
        rows = snapshot.rows.len(),
        fingerprint = %fingerprint,
        "inventory report assembled"
    );

    InventoryReport {
        title: REPORT_TITLE.to_string(),
        company_label,
        qr_payload: fingerprint.clone(),
        fingerprint,
        hash_line,
        generated_at: Utc::now(),
        rows: snapshot.rows,
    }
}

/// Dispatches an externally rendered copy of the report by email.
///
/// `pdf_bytes` is the rendered document; rendering is out of scope here, so
/// the caller provides the bytes (typically read from the renderer's output
/// file).
pub async fn dispatch_report(
    client: &ApiClient,
    to: &str,
    method: SendMethod,
    pdf_bytes: &[u8],
) -> Result<DispatchOutcome, AppError> {
    validate_email(to)?;

    let dispatch = ReportDispatch {
        to: to.trim().to_string(),
        subject: DISPATCH_SUBJECT.to_string(),
        pdf_base64: BASE64_STANDARD.encode(pdf_bytes),
        method,
    };

    let outcome = client.mailer().send_report(&dispatch).await?;
    if !outcome.success {
        return Err(AppError::dispatch(
            outcome
                .message
                .unwrap_or_else(|| "send endpoint refused the dispatch".to_string()),
        ));
    }

    Ok(outcome)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kardex_core::Company;

    fn item(id: i64, nit: &str) -> InventoryItem {
        InventoryItem {
            id,
            product_code: format!("SKU-{id:03}"),
            product_name: format!("Product {id}"),
            price_cop: 400000.0,
            price_usd: 100.0,
            price_eur: 85.0,
            company_nit: nit.to_string(),
            company_name: format!("Company {nit}"),
            quantity: id,
        }
    }

    fn store_with_acme() -> CompanyStore {
        let store = CompanyStore::new();
        store.upsert(Company {
            nit: "900-1".to_string(),
            name: "Acme Ltda".to_string(),
            address: "Calle 1 # 2-3".to_string(),
            phone: "+57 300 000 0000".to_string(),
        });
        store
    }

    #[test]
    fn test_report_for_all_companies() {
        let snapshot = InventorySnapshot::scoped(
            CompanyScope::All,
            &[item(1, "900-1"), item(2, "900-2")],
        );
        let report = assemble_report(&store_with_acme(), snapshot);

        assert_eq!(report.title, "Inventario por Empresa");
        assert_eq!(report.company_label, "Todas");
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.qr_payload, report.fingerprint);
    }

    #[test]
    fn test_report_uses_store_name_for_scoped_company() {
        let snapshot = InventorySnapshot::scoped(
            CompanyScope::Nit("900-1".to_string()),
            &[item(1, "900-1"), item(2, "900-2")],
        );
        let report = assemble_report(&store_with_acme(), snapshot);

        assert_eq!(report.company_label, "Acme Ltda");
        assert_eq!(report.rows.len(), 1);
    }

    #[test]
    fn test_report_falls_back_to_nit_for_unknown_company() {
        let snapshot =
            InventorySnapshot::scoped(CompanyScope::Nit("999-9".to_string()), &[item(1, "999-9")]);
        let report = assemble_report(&CompanyStore::new(), snapshot);
        assert_eq!(report.company_label, "999-9");
    }

    #[test]
    fn test_hash_line_truncates_fingerprint() {
        let snapshot = InventorySnapshot::scoped(CompanyScope::All, &[item(1, "900-1")]);
        let report = assemble_report(&CompanyStore::new(), snapshot);

        assert!(report.hash_line.starts_with("Hash (SHA-256): poe-"));
        assert!(report.hash_line.ends_with("..."));
        // At most 20 shown characters, always a prefix of the fingerprint
        let shown = report
            .hash_line
            .trim_start_matches("Hash (SHA-256): ")
            .trim_end_matches("...");
        assert!(shown.len() <= 20);
        assert!(report.fingerprint.starts_with(shown));
    }

    #[test]
    fn test_identical_snapshots_report_identical_fingerprints() {
        let rows = [item(1, "900-1"), item(2, "900-2")];
        let a = assemble_report(
            &CompanyStore::new(),
            InventorySnapshot::scoped(CompanyScope::All, &rows),
        );
        let b = assemble_report(
            &CompanyStore::new(),
            InventorySnapshot::scoped(CompanyScope::All, &rows),
        );
        assert_eq!(a.fingerprint, b.fingerprint);
    }
}
