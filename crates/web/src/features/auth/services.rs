use storage::{
    Store, UserStore,
    dto::user::{Credentials, NewUser},
    error::StorageError,
    models::User,
};
use validator::Validate;

use crate::error::{WebError, WebResult};
use crate::token::TokenService;

const CREDENTIALS_REQUIRED: &str = "Email and password are required";
const INVALID_LOGIN: &str = "Invalid login";

/// Validate and store a new account
pub async fn register(store: &dyn Store, credentials: Credentials) -> WebResult<User> {
    let (email, password) = credentials
        .into_parts()
        .ok_or(WebError::MissingField(CREDENTIALS_REQUIRED))?;

    let candidate = NewUser { email, password };
    candidate.validate().map_err(|errors| WebError::Validation {
        message: "Invalid user",
        errors,
    })?;

    let user = store.create_user(&candidate).await?;
    tracing::info!(user_id = user.id, "User registered");

    Ok(user)
}

/// Check credentials and issue a token. Unknown email and wrong password
/// fail identically.
pub async fn login(
    store: &dyn Store,
    tokens: &TokenService,
    credentials: Credentials,
) -> WebResult<String> {
    let (email, password) = credentials
        .into_parts()
        .ok_or(WebError::MissingField(CREDENTIALS_REQUIRED))?;

    let user = match store.find_user_by_email(&email).await {
        Ok(user) => user,
        Err(StorageError::NotFound) => {
            tracing::warn!("Login attempt for unknown account");
            return Err(WebError::Unauthenticated(INVALID_LOGIN));
        }
        Err(e) => return Err(e.into()),
    };

    if user.password != password {
        tracing::warn!(user_id = user.id, "Login attempt with wrong password");
        return Err(WebError::Unauthenticated(INVALID_LOGIN));
    }

    let token = tokens
        .issue(user.id)
        .map_err(|e| WebError::InternalServerError(format!("token signing failed: {}", e)))?;
    tracing::info!(user_id = user.id, "User logged in");

    Ok(token)
}
