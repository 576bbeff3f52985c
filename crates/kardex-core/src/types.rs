//! # Domain Types
//!
//! Core domain types used throughout Kardex.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Company      │   │     Product     │   │  InventoryItem  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  nit (business) │   │  code (business)│   │  id (backend)   │       │
//! │  │  name           │   │  name           │   │  product_code   │       │
//! │  │  address        │   │  features       │   │  price_cop/usd/ │       │
//! │  │  phone          │   │  price_cop/usd/ │   │        eur      │       │
//! │  └─────────────────┘   │        eur      │   │  company_nit    │       │
//! │                        │  company_nit    │   │  quantity       │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Business-Key Identity
//! The backend identifies companies by NIT (the tax registration number) and
//! products by their code. Inventory rows are read-only projections the
//! backend joins for us; their numeric `id` is backend-owned.
//!
//! ## Wire Fidelity
//! Field names double as the JSON wire format (snake_case), so these structs
//! serialize straight into the backend's request/response bodies. That is the
//! schema-at-the-boundary contract: no loosely-typed payloads cross the
//! network layer.

use serde::{Deserialize, Serialize};

// =============================================================================
// Company
// =============================================================================

/// A company that owns products and inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Tax registration number - the business identifier.
    pub nit: String,

    /// Legal or display name.
    pub name: String,

    /// Street address.
    pub address: String,

    /// Contact phone number.
    pub phone: String,
}

/// Patch payload for partial company updates.
///
/// `None` fields are skipped during serialization, so a patch only carries
/// what actually changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

// =============================================================================
// Product
// =============================================================================

/// A product registered against a company, with its stored prices.
///
/// ## Stored vs. Quoted Prices
/// Registration quotes the base price across the whole supported currency
/// set for preview, but the backend persists the three columns below. The
/// quote is derived data and is never stored independently of the inputs
/// that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product code (SKU-like business identifier).
    pub code: String,

    /// Display name.
    pub name: String,

    /// Free-form features / specification text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,

    /// Stored price in Colombian pesos.
    pub price_cop: f64,

    /// Stored price in US dollars.
    pub price_usd: f64,

    /// Stored price in euros.
    pub price_eur: f64,

    /// NIT of the owning company.
    pub company_nit: String,
}

/// Patch payload for partial product updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_nit: Option<String>,
}

/// The three stored price columns, for the price-refresh endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPrices {
    pub price_cop: f64,
    pub price_usd: f64,
    pub price_eur: f64,
}

// =============================================================================
// Inventory
// =============================================================================

/// One row of the inventory projection served by the backend.
///
/// The backend joins product and company data into this flat shape; Kardex
/// treats it as read-only. The row order the backend returns is the order
/// that flows into snapshots, reports, and fingerprints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Backend-assigned row id.
    pub id: i64,

    /// Code of the product this row counts.
    pub product_code: String,

    /// Product display name at projection time.
    pub product_name: String,

    /// Price in Colombian pesos.
    pub price_cop: f64,

    /// Price in US dollars.
    pub price_usd: f64,

    /// Price in euros.
    pub price_eur: f64,

    /// NIT of the owning company.
    pub company_nit: String,

    /// Name of the owning company.
    pub company_name: String,

    /// Units on hand.
    pub quantity: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_wire_shape() {
        let company = Company {
            nit: "900123456-7".to_string(),
            name: "Acme Ltda".to_string(),
            address: "Calle 1 # 2-3".to_string(),
            phone: "+57 300 000 0000".to_string(),
        };

        let json = serde_json::to_value(&company).unwrap();
        assert_eq!(json["nit"], "900123456-7");
        assert_eq!(json["name"], "Acme Ltda");

        let back: Company = serde_json::from_value(json).unwrap();
        assert_eq!(back, company);
    }

    #[test]
    fn test_product_optional_features_omitted() {
        let product = Product {
            code: "SKU-001".to_string(),
            name: "Producto X".to_string(),
            features: None,
            price_cop: 400000.0,
            price_usd: 100.0,
            price_eur: 85.0,
            company_nit: "900123456-7".to_string(),
        };

        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("features").is_none());
    }

    #[test]
    fn test_patch_skips_unset_fields() {
        let patch = CompanyPatch {
            phone: Some("+57 301 111 1111".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert!(json.get("name").is_none());
        assert!(json.get("address").is_none());
        assert_eq!(json["phone"], "+57 301 111 1111");
    }

    #[test]
    fn test_inventory_item_parses_backend_row() {
        let raw = r#"{
            "id": 7,
            "product_code": "SKU-001",
            "product_name": "Producto X",
            "price_cop": 400000.0,
            "price_usd": 100.0,
            "price_eur": 85.0,
            "company_nit": "900123456-7",
            "company_name": "Acme Ltda",
            "quantity": 12
        }"#;

        let item: InventoryItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.quantity, 12);
        assert_eq!(item.company_name, "Acme Ltda");
    }
}
