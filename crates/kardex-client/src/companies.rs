//! # Company Endpoints
//!
//! Typed wrappers over `/companies`. One function per backend operation;
//! request and response bodies are the DTOs from kardex-core, so the wire
//! schema is checked at this boundary.

use tracing::debug;

use crate::error::ClientResult;
use crate::http::ApiClient;
use kardex_core::{Company, CompanyPatch};

/// Company operations against the backend.
#[derive(Debug)]
pub struct CompaniesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CompaniesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        CompaniesApi { client }
    }

    /// Lists every company.
    pub async fn list(&self) -> ClientResult<Vec<Company>> {
        let companies: Vec<Company> = self.client.get_json("/companies").await?;
        debug!(count = companies.len(), "fetched companies");
        Ok(companies)
    }

    /// Gets one company by NIT.
    pub async fn get(&self, nit: &str) -> ClientResult<Company> {
        self.client.get_json(&format!("/companies/{nit}")).await
    }

    /// Registers a new company.
    pub async fn create(&self, company: &Company) -> ClientResult<Company> {
        self.client.post_json("/companies", company).await
    }

    /// Partially updates a company.
    pub async fn update(&self, nit: &str, patch: &CompanyPatch) -> ClientResult<Company> {
        self.client
            .put_json(&format!("/companies/{nit}"), patch)
            .await
    }

    /// Deletes a company.
    pub async fn delete(&self, nit: &str) -> ClientResult<()> {
        self.client.delete(&format!("/companies/{nit}")).await
    }
}
