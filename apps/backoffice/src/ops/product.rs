//! # Product Registration
//!
//! The product-registration use case.
//!
//! ## Registration Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Registration Flow                            │
//! │                                                                         │
//! │  operator input (code, name, features, base price, base currency)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate every field ──────────────► VALIDATION_ERROR                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  quote base price across supported currencies                          │
//! │       │  (empty quote = no usable base rate)                           │
//! │       ├─────────────────────────────► CONVERSION_UNAVAILABLE           │
//! │       ▼                                                                 │
//! │  POST /products with the stored price columns                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  upsert into ProductStore, return product + full preview quote         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use tracing::info;

use crate::error::AppError;
use crate::state::ProductStore;
use kardex_client::{ApiClient, RatesProvider};
use kardex_core::pricing::compute_prices;
use kardex_core::validation::{
    validate_base_price, validate_currency, validate_features, validate_nit,
    validate_product_code, validate_product_name,
};
use kardex_core::{CoreError, Currency, Product};

/// Operator input for a product registration.
#[derive(Debug, Clone)]
pub struct RegisterProductInput {
    pub code: String,
    pub name: String,
    pub features: String,
    pub base_price: f64,
    pub base_currency: String,
    pub company_nit: String,
}

/// A successful registration: the created product and the full preview
/// quote it was derived from.
#[derive(Debug, Clone)]
pub struct RegisteredProduct {
    pub product: Product,
    pub quote: BTreeMap<Currency, f64>,
}

/// Validates the input, quotes the base price, and registers the product.
pub async fn register_product(
    client: &ApiClient,
    rates: &RatesProvider,
    products: &ProductStore,
    input: RegisterProductInput,
) -> Result<RegisteredProduct, AppError> {
    validate_product_code(&input.code)?;
    validate_product_name(&input.name)?;
    validate_features(&input.features)?;
    validate_base_price(input.base_price)?;
    validate_nit(&input.company_nit)?;
    let base_currency = validate_currency(&input.base_currency)?;

    let table = rates.current().await;
    let quote = compute_prices(input.base_price, base_currency, &table);
    if quote.is_empty() {
        // No usable rate for the base currency: the whole quote is off
        return Err(CoreError::ConversionUnavailable {
            currency: base_currency.code().to_string(),
        }
        .into());
    }

    let product = Product {
        code: input.code.trim().to_string(),
        name: input.name.trim().to_string(),
        features: Some(input.features.trim().to_string()),
        price_cop: stored_price(&quote, Currency::Cop)?,
        price_usd: stored_price(&quote, Currency::Usd)?,
        price_eur: stored_price(&quote, Currency::Eur)?,
        company_nit: input.company_nit.trim().to_string(),
    };

    let created = client.products().create(&product).await?;
    products.upsert(created.clone());

    info!(
        code = %created.code,
        company = %created.company_nit,
        base = %base_currency,
        "product registered"
    );

    Ok(RegisteredProduct {
        product: created,
        quote,
    })
}

/// Refreshes the product collection from the backend into the store.
pub async fn refresh_products(
    client: &ApiClient,
    products: &ProductStore,
) -> Result<usize, AppError> {
    let fetched = client.products().list().await?;
    let count = fetched.len();
    products.replace_all(fetched);
    Ok(count)
}

/// Extracts one of the stored price columns from the quote.
///
/// The backend persists COP/USD/EUR; a quote missing one of those targets
/// (its rate was absent from the table) cannot be stored, so registration
/// refuses instead of writing a placeholder zero.
fn stored_price(quote: &BTreeMap<Currency, f64>, currency: Currency) -> Result<f64, AppError> {
    quote.get(&currency).copied().ok_or_else(|| {
        AppError::from(CoreError::ConversionUnavailable {
            currency: currency.code().to_string(),
        })
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kardex_core::RateTable;

    fn quote_for(base: Currency) -> BTreeMap<Currency, f64> {
        compute_prices(100.0, base, &RateTable::fallback())
    }

    #[test]
    fn test_stored_price_present() {
        let quote = quote_for(Currency::Usd);
        assert_eq!(stored_price(&quote, Currency::Usd).unwrap(), 100.0);
        assert_eq!(stored_price(&quote, Currency::Eur).unwrap(), 92.0);
    }

    #[test]
    fn test_stored_price_missing_refuses() {
        use std::collections::HashMap;
        // Table without EUR: the quote omits it, registration must refuse
        let table = RateTable::new(
            "USD",
            HashMap::from([("COP".to_string(), 4000.0)]),
        );
        let quote = compute_prices(100.0, Currency::Usd, &table);
        assert!(stored_price(&quote, Currency::Eur).is_err());
        assert!(stored_price(&quote, Currency::Cop).is_ok());
    }
}
