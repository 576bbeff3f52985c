//! # Product Store
//!
//! Holds the product collection fetched from the backend. Same container
//! discipline as the company store: `Arc<Mutex<_>>`, scoped access, no lock
//! across awaits.

use std::sync::{Arc, Mutex};

use kardex_core::Product;

/// Injectable container for the product collection.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    products: Arc<Mutex<Vec<Product>>>,
}

impl ProductStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection (after a fresh fetch).
    pub fn replace_all(&self, products: Vec<Product>) {
        *self.products.lock().expect("product store poisoned") = products;
    }

    /// Inserts a product, or replaces the one sharing its code.
    pub fn upsert(&self, product: Product) {
        let mut products = self.products.lock().expect("product store poisoned");
        match products.iter_mut().find(|p| p.code == product.code) {
            Some(existing) => *existing = product,
            None => products.push(product),
        }
    }

    /// Removes a product by code. Returns whether anything was removed.
    pub fn remove(&self, code: &str) -> bool {
        let mut products = self.products.lock().expect("product store poisoned");
        let before = products.len();
        products.retain(|p| p.code != code);
        products.len() != before
    }

    /// Looks up a product by code.
    pub fn find(&self, code: &str) -> Option<Product> {
        self.products
            .lock()
            .expect("product store poisoned")
            .iter()
            .find(|p| p.code == code)
            .cloned()
    }

    /// Executes a function with read access to the collection.
    pub fn with_products<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[Product]) -> R,
    {
        let products = self.products.lock().expect("product store poisoned");
        f(&products)
    }

    /// Number of products currently held.
    pub fn len(&self) -> usize {
        self.products.lock().expect("product store poisoned").len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(code: &str) -> Product {
        Product {
            code: code.to_string(),
            name: format!("Product {code}"),
            features: None,
            price_cop: 400000.0,
            price_usd: 100.0,
            price_eur: 85.0,
            company_nit: "900-1".to_string(),
        }
    }

    #[test]
    fn test_upsert_and_find() {
        let store = ProductStore::new();
        store.upsert(product("SKU-001"));
        store.upsert(product("SKU-002"));

        assert_eq!(store.len(), 2);
        assert!(store.find("SKU-001").is_some());
        assert!(store.find("SKU-404").is_none());
    }

    #[test]
    fn test_remove() {
        let store = ProductStore::new();
        store.replace_all(vec![product("SKU-001")]);
        assert!(store.remove("SKU-001"));
        assert!(store.is_empty());
    }
}
