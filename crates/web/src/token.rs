//! Short-lived HS256 tokens binding a user id.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::Error};
use serde::{Deserialize, Serialize};

/// Lifetime of an issued token, in seconds.
pub const TOKEN_TTL_SECS: i64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: i32,
    pub iat: i64,
    pub exp: i64,
}

pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn issue(&self, user_id: i32) -> Result<String, Error> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as if it had been signed at `issued_at`.
    pub fn issue_at(&self, user_id: i32, issued_at: DateTime<Utc>) -> Result<String, Error> {
        let iat = issued_at.timestamp();
        let claims = Claims {
            id: user_id,
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Check signature and expiry, returning the bound claims.
    pub fn verify(&self, token: &str) -> Result<Claims, Error> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn fresh_token_round_trips_user_id() {
        let tokens = TokenService::new("secret");
        let token = tokens.issue(7).unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.id, 7);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn token_older_than_ttl_is_rejected() {
        let tokens = TokenService::new("secret");
        let stale = tokens
            .issue_at(7, Utc::now() - Duration::seconds(TOKEN_TTL_SECS + 1))
            .unwrap();

        assert!(tokens.verify(&stale).is_err());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = TokenService::new("one").issue(7).unwrap();
        assert!(TokenService::new("two").verify(&token).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(TokenService::new("secret").verify("not-a-token").is_err());
    }
}
