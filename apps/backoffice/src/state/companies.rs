//! # Company Store
//!
//! Holds the company collection fetched from the backend.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple operations may read/update the collection
//! 2. Only one operation should mutate it at a time
//! 3. Operations run on the async runtime's worker threads
//!
//! Locks are only held inside the `with_*` closures, never across an await
//! point.

use std::sync::{Arc, Mutex};

use kardex_core::Company;

/// Injectable container for the company collection.
#[derive(Debug, Clone, Default)]
pub struct CompanyStore {
    companies: Arc<Mutex<Vec<Company>>>,
}

impl CompanyStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection (after a fresh fetch).
    pub fn replace_all(&self, companies: Vec<Company>) {
        *self.companies.lock().expect("company store poisoned") = companies;
    }

    /// Inserts a company, or replaces the one sharing its NIT.
    pub fn upsert(&self, company: Company) {
        let mut companies = self.companies.lock().expect("company store poisoned");
        match companies.iter_mut().find(|c| c.nit == company.nit) {
            Some(existing) => *existing = company,
            None => companies.push(company),
        }
    }

    /// Removes a company by NIT. Returns whether anything was removed.
    pub fn remove(&self, nit: &str) -> bool {
        let mut companies = self.companies.lock().expect("company store poisoned");
        let before = companies.len();
        companies.retain(|c| c.nit != nit);
        companies.len() != before
    }

    /// Looks up a company by NIT.
    pub fn find(&self, nit: &str) -> Option<Company> {
        self.companies
            .lock()
            .expect("company store poisoned")
            .iter()
            .find(|c| c.nit == nit)
            .cloned()
    }

    /// Executes a function with read access to the collection.
    pub fn with_companies<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[Company]) -> R,
    {
        let companies = self.companies.lock().expect("company store poisoned");
        f(&companies)
    }

    /// Number of companies currently held.
    pub fn len(&self) -> usize {
        self.companies.lock().expect("company store poisoned").len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(nit: &str, name: &str) -> Company {
        Company {
            nit: nit.to_string(),
            name: name.to_string(),
            address: "Calle 1 # 2-3".to_string(),
            phone: "+57 300 000 0000".to_string(),
        }
    }

    #[test]
    fn test_upsert_inserts_then_replaces() {
        let store = CompanyStore::new();
        store.upsert(company("900-1", "Acme"));
        store.upsert(company("900-1", "Acme Renamed"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.find("900-1").unwrap().name, "Acme Renamed");
    }

    #[test]
    fn test_remove() {
        let store = CompanyStore::new();
        store.replace_all(vec![company("900-1", "Acme"), company("900-2", "Beta")]);

        assert!(store.remove("900-1"));
        assert!(!store.remove("900-1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_with_companies_sees_current_state() {
        let store = CompanyStore::new();
        store.replace_all(vec![company("900-1", "Acme")]);

        let names = store.with_companies(|cs| {
            cs.iter().map(|c| c.name.clone()).collect::<Vec<_>>()
        });
        assert_eq!(names, ["Acme"]);
    }

    #[test]
    fn test_clones_share_state() {
        // Two handles to the same store observe each other's writes
        let store = CompanyStore::new();
        let handle = store.clone();
        handle.upsert(company("900-1", "Acme"));
        assert_eq!(store.len(), 1);
    }
}
