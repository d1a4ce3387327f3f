use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;
use storage::error::StorageError;
use validator::ValidationErrors;

use crate::envelope::{AuthEnvelope, MessageEnvelope, ValidationEnvelope};

/// Web layer errors. Every variant renders as an envelope; only unexpected
/// failures leave the 200 range.
#[derive(Debug)]
pub enum WebError {
    MissingField(&'static str),
    InvalidIdentifier(&'static str),
    NotFound(String),
    Validation {
        message: &'static str,
        errors: ValidationErrors,
    },
    Unauthenticated(&'static str),
    BadRequest(String),
    Storage(StorageError),
    InternalServerError(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(msg) => write!(f, "Missing field: {}", msg),
            Self::InvalidIdentifier(msg) => write!(f, "Invalid identifier: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::Validation { message, errors } => write!(f, "{}: {}", message, errors),
            Self::Unauthenticated(msg) => write!(f, "Unauthenticated: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::InternalServerError(msg) => write!(f, "Internal server error: {}", msg),
        }
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        MessageEnvelope::new(true, "An internal error occurred"),
    )
        .into_response()
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingField(msg) | Self::InvalidIdentifier(msg) => {
                MessageEnvelope::new(true, msg).into_response()
            }
            Self::NotFound(msg) | Self::BadRequest(msg) => {
                MessageEnvelope::new(true, msg).into_response()
            }
            Self::Validation { message, errors } => {
                ValidationEnvelope::new(message, &errors).into_response()
            }
            Self::Unauthenticated(msg) => AuthEnvelope::denied(msg).into_response(),
            Self::Storage(StorageError::NotFound) => {
                MessageEnvelope::new(true, "Resource not found").into_response()
            }
            Self::Storage(StorageError::ConstraintViolation(msg)) => {
                MessageEnvelope::new(true, msg).into_response()
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                internal_error()
            }
            Self::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                internal_error()
            }
        }
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl WebError {
    /// Turn a storage `NotFound` into a domain not-found message.
    pub fn not_found(message: impl Into<String>) -> impl FnOnce(StorageError) -> WebError {
        move |error| match error {
            StorageError::NotFound => WebError::NotFound(message.into()),
            other => WebError::Storage(other),
        }
    }
}

pub type WebResult<T> = Result<T, WebError>;
