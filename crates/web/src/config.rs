use anyhow::{Context, Result, ensure};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `None` runs the API on the in-memory store.
    pub database_url: Option<String>,
    pub jwt_secret: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(port) => port.parse().context("PORT must be a number")?,
            None => 3000,
        };

        let jwt_secret = lookup("JWT_SECRET").context("Cannot load JWT_SECRET env variable")?;
        ensure!(!jwt_secret.is_empty(), "JWT_SECRET must not be empty");

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            jwt_secret,
        })
    }
}
