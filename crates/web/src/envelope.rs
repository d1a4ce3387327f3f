//! The four JSON shapes every endpoint answers with. Clients branch on
//! `error`; domain failures are still `200 OK`.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

/// `{error, message}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageEnvelope {
    pub error: bool,
    pub message: String,
}

impl MessageEnvelope {
    pub fn new(error: bool, message: impl Into<String>) -> Self {
        Self {
            error,
            message: message.into(),
        }
    }
}

/// `{error: !auth, message, auth, token}`; `token` is omitted unless granted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthEnvelope {
    pub error: bool,
    pub message: String,
    pub auth: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl AuthEnvelope {
    pub fn new(auth: bool, message: impl Into<String>, token: Option<String>) -> Self {
        Self {
            error: !auth,
            message: message.into(),
            auth,
            token,
        }
    }

    pub fn granted(message: impl Into<String>, token: String) -> Self {
        Self::new(true, message, Some(token))
    }

    pub fn denied(message: impl Into<String>) -> Self {
        Self::new(false, message, None)
    }
}

/// `{error: false, message, payload}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PayloadEnvelope<T> {
    pub error: bool,
    pub message: String,
    pub payload: T,
}

impl<T> PayloadEnvelope<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            error: false,
            message: message.into(),
            payload: data,
        }
    }
}

/// One rejected field and every constraint it broke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PropertyViolations {
    pub property: String,
    pub constraints: Vec<String>,
}

/// `{error: true, message, errors: [{property, constraints}]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationEnvelope {
    pub error: bool,
    pub message: String,
    pub errors: Vec<PropertyViolations>,
}

impl ValidationEnvelope {
    pub fn new(message: impl Into<String>, errors: &ValidationErrors) -> Self {
        let mut violations: Vec<PropertyViolations> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errors)| PropertyViolations {
                property: field.to_string(),
                constraints: errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect(),
            })
            .collect();
        violations.sort_by(|a, b| a.property.cmp(&b.property));

        Self {
            error: true,
            message: message.into(),
            errors: violations,
        }
    }
}

impl IntoResponse for MessageEnvelope {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

impl IntoResponse for AuthEnvelope {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

impl<T: Serialize> IntoResponse for PayloadEnvelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

impl IntoResponse for ValidationEnvelope {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use validator::ValidationError;

    #[test]
    fn auth_envelope_mirrors_error_flag() {
        let denied = serde_json::to_value(AuthEnvelope::denied("Invalid login")).unwrap();
        assert_eq!(
            denied,
            json!({"error": true, "message": "Invalid login", "auth": false})
        );

        let granted = serde_json::to_value(AuthEnvelope::granted("Login success", "t".into()))
            .unwrap();
        assert_eq!(granted["error"], false);
        assert_eq!(granted["token"], "t");
    }

    #[test]
    fn payload_envelope_is_never_an_error() {
        let value = serde_json::to_value(PayloadEnvelope::new(vec![1, 2], "List")).unwrap();
        assert_eq!(value, json!({"error": false, "message": "List", "payload": [1, 2]}));
    }

    #[test]
    fn validation_envelope_lists_fields_in_order() {
        let mut errors = ValidationErrors::new();
        let mut password = ValidationError::new("length");
        password.message = Some("password too short".into());
        errors.add("password", password);
        errors.add("email", ValidationError::new("email"));

        let envelope = ValidationEnvelope::new("Invalid user", &errors);
        assert!(envelope.error);
        assert_eq!(
            envelope.errors,
            vec![
                PropertyViolations {
                    property: "email".into(),
                    constraints: vec!["email".into()],
                },
                PropertyViolations {
                    property: "password".into(),
                    constraints: vec!["password too short".into()],
                },
            ]
        );
    }
}
