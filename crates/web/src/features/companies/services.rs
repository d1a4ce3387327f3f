use storage::{
    CompanyStore, Store,
    dto::company::{CreateCompanyRequest, UpdateCompanyRequest},
    models::{Company, CompanyWithAthletes},
};
use validator::Validate;

use crate::error::{WebError, WebResult};

const FIELDS_REQUIRED: &str = "Name and description are required";

fn company_not_found(id: i32) -> String {
    format!("Company {} not found", id)
}

fn invalid_company(errors: validator::ValidationErrors) -> WebError {
    WebError::Validation {
        message: "Invalid company",
        errors,
    }
}

/// List all companies, without athletes
pub async fn list_companies(store: &dyn Store) -> WebResult<Vec<Company>> {
    Ok(store.list_companies().await?)
}

/// Get a company with its athletes
pub async fn get_company(store: &dyn Store, id: i32) -> WebResult<CompanyWithAthletes> {
    store
        .find_company_with_athletes(id)
        .await
        .map_err(WebError::not_found(company_not_found(id)))
}

/// Create a company; it starts with no athletes
pub async fn create_company(
    store: &dyn Store,
    request: CreateCompanyRequest,
) -> WebResult<CompanyWithAthletes> {
    let candidate = request
        .into_candidate()
        .ok_or(WebError::MissingField(FIELDS_REQUIRED))?;

    candidate.validate().map_err(invalid_company)?;

    let company = store.create_company(&candidate).await?;
    Ok(CompanyWithAthletes {
        company,
        athletes: Vec::new(),
    })
}

/// Replace name and description, and the athlete set when one is given
pub async fn update_company(
    store: &dyn Store,
    id: i32,
    request: UpdateCompanyRequest,
) -> WebResult<CompanyWithAthletes> {
    let (candidate, athletes) = request
        .into_parts()
        .ok_or(WebError::MissingField(FIELDS_REQUIRED))?;

    store
        .find_company(id)
        .await
        .map_err(WebError::not_found(company_not_found(id)))?;

    candidate.validate().map_err(invalid_company)?;

    store
        .update_company(id, &candidate, athletes.as_deref())
        .await
        .map_err(WebError::not_found(company_not_found(id)))
}

/// Delete a company and return the removed record. Athletes that referenced
/// it are left untouched.
pub async fn delete_company(store: &dyn Store, id: i32) -> WebResult<Company> {
    let company = store
        .find_company(id)
        .await
        .map_err(WebError::not_found(company_not_found(id)))?;

    store
        .delete_company(id)
        .await
        .map_err(WebError::not_found(company_not_found(id)))?;

    Ok(company)
}
