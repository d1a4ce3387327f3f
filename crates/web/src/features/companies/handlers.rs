use axum::{
    Extension,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    dto::company::{CreateCompanyRequest, UpdateCompanyRequest},
    models::{Company, CompanyWithAthletes},
};

use super::services;
use crate::envelope::PayloadEnvelope;
use crate::error::WebError;
use crate::extract::{JsonBody, parse_id};
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/company",
    responses(
        (status = 200, description = "List all companies", body = PayloadEnvelope<Vec<Company>>)
    ),
    tag = "companies"
)]
pub async fn list_companies(State(state): State<AppState>) -> Result<Response, WebError> {
    let companies = services::list_companies(state.store.as_ref()).await?;

    Ok(PayloadEnvelope::new(companies, "List of companies").into_response())
}

#[utoipa::path(
    get,
    path = "/company/{id}",
    params(
        ("id" = i32, Path, description = "Company id")
    ),
    responses(
        (status = 200, description = "Company with its athletes, or a not-found envelope", body = PayloadEnvelope<CompanyWithAthletes>)
    ),
    tag = "companies"
)]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = parse_id(&id)?;
    let company = services::get_company(state.store.as_ref(), id).await?;

    Ok(PayloadEnvelope::new(company, format!("Company {}", id)).into_response())
}

#[utoipa::path(
    post,
    path = "/company",
    request_body = CreateCompanyRequest,
    security(
        ("api_key" = [])
    ),
    responses(
        (status = 200, description = "Company created, or an error envelope", body = PayloadEnvelope<CompanyWithAthletes>)
    ),
    tag = "companies"
)]
pub async fn create_company(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    JsonBody(request): JsonBody<CreateCompanyRequest>,
) -> Result<Response, WebError> {
    let company = services::create_company(state.store.as_ref(), request).await?;
    tracing::info!(company_id = company.company.id, user_id = ?user.id(), "Company created");

    Ok(PayloadEnvelope::new(company, "Company created").into_response())
}

#[utoipa::path(
    put,
    path = "/company/{id}",
    params(
        ("id" = i32, Path, description = "Company id")
    ),
    request_body = UpdateCompanyRequest,
    security(
        ("api_key" = [])
    ),
    responses(
        (status = 200, description = "Company updated, or an error envelope", body = PayloadEnvelope<CompanyWithAthletes>)
    ),
    tag = "companies"
)]
pub async fn update_company(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateCompanyRequest>,
) -> Result<Response, WebError> {
    let id = parse_id(&id)?;
    let company = services::update_company(state.store.as_ref(), id, request).await?;
    tracing::info!(company_id = id, user_id = ?user.id(), "Company updated");

    Ok(PayloadEnvelope::new(company, "Company updated").into_response())
}

#[utoipa::path(
    delete,
    path = "/company/{id}",
    params(
        ("id" = i32, Path, description = "Company id")
    ),
    security(
        ("api_key" = [])
    ),
    responses(
        (status = 200, description = "Removed company, or an error envelope", body = PayloadEnvelope<Company>)
    ),
    tag = "companies"
)]
pub async fn delete_company(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = parse_id(&id)?;
    let company = services::delete_company(state.store.as_ref(), id).await?;
    tracing::info!(company_id = id, user_id = ?user.id(), "Company removed");

    Ok(PayloadEnvelope::new(company, format!("Company {} removed", id)).into_response())
}
