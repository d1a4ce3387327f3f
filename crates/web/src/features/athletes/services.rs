use storage::{
    AthleteStore, CompanyStore, Store,
    dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest},
    models::{Athlete, AthleteWithCompany},
};

use crate::error::{WebError, WebResult};

const ATHLETE_NOT_FOUND: &str = "Athlete not found";

fn invalid_athlete(errors: validator::ValidationErrors) -> WebError {
    WebError::Validation {
        message: "Invalid athlete",
        errors,
    }
}

/// List all athletes
pub async fn list_athletes(store: &dyn Store) -> WebResult<Vec<Athlete>> {
    Ok(store.list_athletes().await?)
}

/// Get an athlete with its company
pub async fn get_athlete(store: &dyn Store, id: i32) -> WebResult<AthleteWithCompany> {
    store
        .find_athlete_with_company(id)
        .await
        .map_err(WebError::not_found(ATHLETE_NOT_FOUND))
}

/// Create a new athlete
pub async fn create_athlete(
    store: &dyn Store,
    request: CreateAthleteRequest,
) -> WebResult<Athlete> {
    let candidate = request
        .into_candidate()
        .ok_or(WebError::MissingField(
            "First name, last name and age are required",
        ))?;

    candidate.check().map_err(invalid_athlete)?;

    Ok(store.create_athlete(&candidate).await?)
}

/// Partially update an athlete. `companyId`, when given, must name an
/// existing company.
pub async fn update_athlete(
    store: &dyn Store,
    id: i32,
    request: UpdateAthleteRequest,
) -> WebResult<Athlete> {
    let company_id = request
        .company_id()
        .map_err(|_| WebError::InvalidIdentifier("Company id is invalid"))?;

    let existing = store
        .find_athlete(id)
        .await
        .map_err(WebError::not_found(ATHLETE_NOT_FOUND))?;

    let company_id = match company_id {
        Some(company_id) => {
            store
                .find_company(company_id)
                .await
                .map_err(WebError::not_found("Company not found"))?;
            Some(company_id)
        }
        None => existing.company_id,
    };

    let candidate = request.merge(&existing);
    candidate.check().map_err(invalid_athlete)?;

    let athlete = Athlete {
        id,
        age: candidate.age(),
        first_name: candidate.first_name,
        last_name: candidate.last_name,
        company_id,
    };

    store
        .update_athlete(&athlete)
        .await
        .map_err(WebError::not_found(ATHLETE_NOT_FOUND))
}

/// Delete an athlete
pub async fn delete_athlete(store: &dyn Store, id: i32) -> WebResult<()> {
    store
        .find_athlete(id)
        .await
        .map_err(WebError::not_found(ATHLETE_NOT_FOUND))?;

    store
        .delete_athlete(id)
        .await
        .map_err(WebError::not_found(ATHLETE_NOT_FOUND))
}
