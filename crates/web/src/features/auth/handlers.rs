use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::user::Credentials;

use super::services;
use crate::envelope::{AuthEnvelope, MessageEnvelope};
use crate::error::WebError;
use crate::extract::JsonBody;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = Credentials,
    responses(
        (status = 200, description = "User created, or a message/validation envelope with error = true", body = MessageEnvelope)
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(credentials): JsonBody<Credentials>,
) -> Result<Response, WebError> {
    services::register(state.store.as_ref(), credentials).await?;

    Ok(MessageEnvelope::new(false, "User created").into_response())
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = Credentials,
    responses(
        (status = 200, description = "auth = true with a token, or auth = false", body = AuthEnvelope)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(credentials): JsonBody<Credentials>,
) -> Result<Response, WebError> {
    let token = services::login(state.store.as_ref(), &state.tokens, credentials).await?;

    Ok(AuthEnvelope::granted("Login success", token).into_response())
}
