use axum::{
    Json, async_trait,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::error::{WebError, WebResult};

/// JSON body extractor that answers with an envelope instead of axum's
/// plain-text rejection. A request without a JSON content type is read as an
/// empty object so that presence checks report the missing fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => Ok(Self(T::default())),
            Err(rejection) => Err(WebError::BadRequest(rejection.body_text())),
        }
    }
}

/// Path ids must be plain decimal digits.
pub fn parse_id(raw: &str) -> WebResult<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(WebError::InvalidIdentifier("Id is required"));
    }

    raw.parse()
        .map_err(|_| WebError::InvalidIdentifier("Id is required"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_decimal_ids() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("007").unwrap(), 7);
    }

    #[test]
    fn rejects_everything_else() {
        for raw in ["", "abc", "-1", "1.5", " 1", "99999999999"] {
            assert!(
                matches!(parse_id(raw), Err(WebError::InvalidIdentifier(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
