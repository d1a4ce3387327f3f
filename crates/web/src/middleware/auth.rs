use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use storage::{UserStore, error::StorageError, models::UserInfo};

use crate::envelope::AuthEnvelope;
use crate::error::WebError;
use crate::state::AppState;

/// Header carrying the signed token on protected routes.
pub const TOKEN_HEADER: &str = "x-access-token";

/// User attached to a request that passed token verification. `None` when
/// the token was valid but its user no longer exists.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<UserInfo>);

impl CurrentUser {
    pub fn id(&self) -> Option<i32> {
        self.0.as_ref().map(|user| user.id)
    }
}

/// Result of checking a request's token.
#[derive(Debug)]
pub enum Verification {
    Continue(CurrentUser),
    Reject(AuthEnvelope),
}

pub async fn verify(state: &AppState, headers: &HeaderMap) -> Result<Verification, StorageError> {
    let Some(value) = headers.get(TOKEN_HEADER).filter(|v| !v.is_empty()) else {
        return Ok(Verification::Reject(AuthEnvelope::denied(
            "No token provided",
        )));
    };

    let claims = match value
        .to_str()
        .ok()
        .and_then(|token| state.tokens.verify(token).ok())
    {
        Some(claims) => claims,
        None => {
            tracing::warn!("Rejected invalid or expired token");
            return Ok(Verification::Reject(AuthEnvelope::denied("Invalid token")));
        }
    };

    let user = match state.store.find_user_by_id(claims.id).await {
        Ok(user) => Some(UserInfo::from(user)),
        Err(StorageError::NotFound) => {
            tracing::warn!(user_id = claims.id, "Token references a missing user");
            None
        }
        Err(e) => return Err(e),
    };

    Ok(Verification::Continue(CurrentUser(user)))
}

/// Gate for mutating routes: only requests with a valid token reach the
/// handler.
pub async fn require_token(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let verification = verify(&state, req.headers()).await;

    match verification {
        Ok(Verification::Continue(user)) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Ok(Verification::Reject(envelope)) => envelope.into_response(),
        Err(e) => WebError::from(e).into_response(),
    }
}
