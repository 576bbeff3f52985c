//! # Company Registration
//!
//! Company CRUD as operations: validate first, call the backend, keep the
//! store in sync. Mirrors the product flow without the pricing step.

use tracing::info;

use crate::error::AppError;
use crate::state::CompanyStore;
use kardex_client::ApiClient;
use kardex_core::validation::{validate_company_name, validate_nit};
use kardex_core::Company;

/// Operator input for a company registration.
#[derive(Debug, Clone)]
pub struct RegisterCompanyInput {
    pub nit: String,
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Validates the input and registers the company.
pub async fn register_company(
    client: &ApiClient,
    companies: &CompanyStore,
    input: RegisterCompanyInput,
) -> Result<Company, AppError> {
    validate_nit(&input.nit)?;
    validate_company_name(&input.name)?;

    let company = Company {
        nit: input.nit.trim().to_string(),
        name: input.name.trim().to_string(),
        address: input.address.trim().to_string(),
        phone: input.phone.trim().to_string(),
    };

    let created = client.companies().create(&company).await?;
    companies.upsert(created.clone());

    info!(nit = %created.nit, "company registered");
    Ok(created)
}

/// Refreshes the company collection from the backend into the store.
pub async fn refresh_companies(
    client: &ApiClient,
    companies: &CompanyStore,
) -> Result<usize, AppError> {
    let fetched = client.companies().list().await?;
    let count = fetched.len();
    companies.replace_all(fetched);
    Ok(count)
}
