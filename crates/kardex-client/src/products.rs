//! # Product Endpoints
//!
//! Typed wrappers over `/products`, including the per-company listing and
//! the price-refresh operation used when a new rate table lands.

use tracing::debug;

use crate::error::ClientResult;
use crate::http::ApiClient;
use kardex_core::{Product, ProductPatch, ProductPrices};

/// Product operations against the backend.
#[derive(Debug)]
pub struct ProductsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProductsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        ProductsApi { client }
    }

    /// Lists every product.
    pub async fn list(&self) -> ClientResult<Vec<Product>> {
        let products: Vec<Product> = self.client.get_json("/products").await?;
        debug!(count = products.len(), "fetched products");
        Ok(products)
    }

    /// Gets one product by code.
    pub async fn get(&self, code: &str) -> ClientResult<Product> {
        self.client.get_json(&format!("/products/{code}")).await
    }

    /// Registers a new product with its stored prices.
    pub async fn create(&self, product: &Product) -> ClientResult<Product> {
        self.client.post_json("/products", product).await
    }

    /// Partially updates a product.
    pub async fn update(&self, code: &str, patch: &ProductPatch) -> ClientResult<Product> {
        self.client
            .put_json(&format!("/products/{code}"), patch)
            .await
    }

    /// Deletes a product.
    pub async fn delete(&self, code: &str) -> ClientResult<()> {
        self.client.delete(&format!("/products/{code}")).await
    }

    /// Lists the products owned by one company.
    pub async fn list_by_company(&self, nit: &str) -> ClientResult<Vec<Product>> {
        self.client
            .get_json(&format!("/products/company/{nit}"))
            .await
    }

    /// Replaces the stored price columns of a product.
    ///
    /// Used after re-quoting against a fresher rate table; the backend does
    /// not recompute prices itself.
    pub async fn update_prices(&self, code: &str, prices: &ProductPrices) -> ClientResult<Product> {
        self.client
            .patch_json(&format!("/products/{code}/prices"), prices)
            .await
    }
}
