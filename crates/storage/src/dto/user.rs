use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::provided;

/// Body of `POST /auth/register` and `POST /auth/login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    /// Both fields, or `None` when either is missing or empty.
    pub fn into_parts(self) -> Option<(String, String)> {
        Some((provided(self.email)?, provided(self.password)?))
    }
}

/// Candidate account checked before it is persisted.
#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    #[validate(email(message = "email must be an email"))]
    pub email: String,

    #[validate(custom(function = "validate_password_length"))]
    pub password: String,
}

const MIN_PASSWORD_LEN: usize = 5;

/// Length is measured in UTF-16 code units, so an emoji counts as two.
fn validate_password_length(password: &str) -> Result<(), ValidationError> {
    if password.encode_utf16().count() >= MIN_PASSWORD_LEN {
        Ok(())
    } else {
        let mut error = ValidationError::new("minLength");
        error.message = Some(Cow::Borrowed(
            "password must be longer than or equal to 5 characters",
        ));
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_missing() {
        let creds = Credentials {
            email: Some(String::new()),
            password: Some("secret".into()),
        };
        assert!(creds.into_parts().is_none());
        assert!(Credentials::default().into_parts().is_none());
    }

    #[test]
    fn rejects_malformed_email_and_short_password() {
        let user = NewUser {
            email: "not-an-email".into(),
            password: "abcd".into(),
        };
        let errors = user.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn accepts_minimal_valid_user() {
        let user = NewUser {
            email: "coach@example.com".into(),
            password: "abcde".into(),
        };
        assert!(user.validate().is_ok());
    }

    #[test]
    fn password_length_counts_utf16_units() {
        let user = NewUser {
            email: "coach@example.com".into(),
            password: "\u{1F600}\u{1F600}\u{1F600}".into(),
        };
        assert!(user.validate().is_ok());

        let user = NewUser {
            password: "\u{1F600}\u{1F600}".into(),
            ..user
        };
        let errors = user.validate().unwrap_err();
        let fields = errors.field_errors();
        let messages: Vec<_> = fields["password"]
            .iter()
            .filter_map(|e| e.message.as_deref())
            .collect();
        assert_eq!(
            messages,
            ["password must be longer than or equal to 5 characters"]
        );
    }
}
