use axum::{
    Extension,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest},
    models::{Athlete, AthleteWithCompany},
};

use super::services;
use crate::envelope::{MessageEnvelope, PayloadEnvelope};
use crate::error::WebError;
use crate::extract::{JsonBody, parse_id};
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/athlete",
    responses(
        (status = 200, description = "List all athletes", body = PayloadEnvelope<Vec<Athlete>>)
    ),
    tag = "athletes"
)]
pub async fn list_athletes(State(state): State<AppState>) -> Result<Response, WebError> {
    let athletes = services::list_athletes(state.store.as_ref()).await?;

    Ok(PayloadEnvelope::new(athletes, "List of athletes").into_response())
}

#[utoipa::path(
    get,
    path = "/athlete/{id}",
    params(
        ("id" = i32, Path, description = "Athlete id")
    ),
    responses(
        (status = 200, description = "Athlete with its company, or a not-found envelope", body = PayloadEnvelope<AthleteWithCompany>)
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = parse_id(&id)?;
    let athlete = services::get_athlete(state.store.as_ref(), id).await?;

    Ok(PayloadEnvelope::new(athlete, format!("Athlete {}", id)).into_response())
}

#[utoipa::path(
    post,
    path = "/athlete",
    request_body = CreateAthleteRequest,
    security(
        ("api_key" = [])
    ),
    responses(
        (status = 200, description = "Athlete created, or an error envelope", body = PayloadEnvelope<Athlete>)
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    JsonBody(request): JsonBody<CreateAthleteRequest>,
) -> Result<Response, WebError> {
    let athlete = services::create_athlete(state.store.as_ref(), request).await?;
    tracing::info!(athlete_id = athlete.id, user_id = ?user.id(), "Athlete created");

    Ok(PayloadEnvelope::new(athlete, "Athlete created").into_response())
}

#[utoipa::path(
    put,
    path = "/athlete/{id}",
    params(
        ("id" = i32, Path, description = "Athlete id")
    ),
    request_body = UpdateAthleteRequest,
    security(
        ("api_key" = [])
    ),
    responses(
        (status = 200, description = "Athlete updated, or an error envelope", body = PayloadEnvelope<Athlete>)
    ),
    tag = "athletes"
)]
pub async fn update_athlete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateAthleteRequest>,
) -> Result<Response, WebError> {
    let id = parse_id(&id)?;
    let athlete = services::update_athlete(state.store.as_ref(), id, request).await?;
    tracing::info!(athlete_id = id, user_id = ?user.id(), "Athlete updated");

    Ok(PayloadEnvelope::new(athlete, "Athlete updated").into_response())
}

#[utoipa::path(
    delete,
    path = "/athlete/{id}",
    params(
        ("id" = i32, Path, description = "Athlete id")
    ),
    security(
        ("api_key" = [])
    ),
    responses(
        (status = 200, description = "Athlete removed, or an error envelope", body = MessageEnvelope)
    ),
    tag = "athletes"
)]
pub async fn delete_athlete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id = parse_id(&id)?;
    services::delete_athlete(state.store.as_ref(), id).await?;
    tracing::info!(athlete_id = id, user_id = ?user.id(), "Athlete removed");

    Ok(MessageEnvelope::new(false, format!("Athlete {} removed", id)).into_response())
}
