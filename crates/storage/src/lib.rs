pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod store;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use error::Result;

pub use store::{AthleteStore, CompanyStore, MemoryStore, Store, UserStore};

/// Connection pool for the PostgreSQL backend.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    const INITIAL_SCHEMA: &str = include_str!("../migrations/20240101000000_initial_schema.sql");

    #[test]
    fn text_columns_are_unbounded() {
        assert!(!INITIAL_SCHEMA.to_uppercase().contains("VARCHAR("));
    }
}
