use sqlx::PgPool;

use crate::dto::athlete::AthleteCandidate;
use crate::error::{Result, StorageError};
use crate::models::{Athlete, AthleteWithCompany, Company};

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all athletes
    pub async fn list(&self) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, first_name, last_name, age, company_id
            FROM athletes
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, first_name, last_name, age, company_id
            FROM athletes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Find athlete by ID with its company resolved
    pub async fn find_with_company(&self, id: i32) -> Result<AthleteWithCompany> {
        let athlete = self.find_by_id(id).await?;

        let company = match athlete.company_id {
            Some(company_id) => {
                sqlx::query_as::<_, Company>(
                    "SELECT id, name, description FROM companies WHERE id = $1",
                )
                .bind(company_id)
                .fetch_optional(self.pool)
                .await?
            }
            None => None,
        };

        Ok(AthleteWithCompany { athlete, company })
    }

    /// Create a new athlete. Athletes never start with a company.
    pub async fn create(&self, athlete: &AthleteCandidate) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            INSERT INTO athletes (first_name, last_name, age)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, age, company_id
            "#,
        )
        .bind(&athlete.first_name)
        .bind(&athlete.last_name)
        .bind(athlete.age())
        .fetch_one(self.pool)
        .await?;

        Ok(athlete)
    }

    /// Write every column of an existing athlete
    pub async fn update(&self, athlete: &Athlete) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            UPDATE athletes
            SET first_name = $2,
                last_name = $3,
                age = $4,
                company_id = $5
            WHERE id = $1
            RETURNING id, first_name, last_name, age, company_id
            "#,
        )
        .bind(athlete.id)
        .bind(&athlete.first_name)
        .bind(&athlete.last_name)
        .bind(athlete.age)
        .bind(athlete.company_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Delete an athlete by ID
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM athletes WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
