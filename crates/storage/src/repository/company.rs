use sqlx::PgPool;

use crate::dto::company::CompanyCandidate;
use crate::error::{Result, StorageError};
use crate::models::{Athlete, Company, CompanyWithAthletes};

/// Repository for Company database operations
pub struct CompanyRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CompanyRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all companies, without their athletes
    pub async fn list(&self) -> Result<Vec<Company>> {
        let companies = sqlx::query_as::<_, Company>(
            "SELECT id, name, description FROM companies ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(companies)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Company> {
        sqlx::query_as::<_, Company>("SELECT id, name, description FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    /// Get a company along with the athletes that reference it
    pub async fn find_with_athletes(&self, id: i32) -> Result<CompanyWithAthletes> {
        let company = self.find_by_id(id).await?;
        let athletes = self.athletes_of(id).await?;

        Ok(CompanyWithAthletes { company, athletes })
    }

    async fn athletes_of(&self, company_id: i32) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, first_name, last_name, age, company_id
            FROM athletes
            WHERE company_id = $1
            ORDER BY id
            "#,
        )
        .bind(company_id)
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    pub async fn create(&self, company: &CompanyCandidate) -> Result<Company> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(&company.name)
        .bind(&company.description)
        .fetch_one(self.pool)
        .await?;

        Ok(company)
    }

    /// Overwrite name and description and, when `athletes` is given, make it
    /// the exact set of athletes linked to this company. Unknown athlete ids
    /// are ignored. Runs in a single transaction.
    pub async fn update(
        &self,
        id: i32,
        changes: &CompanyCandidate,
        athletes: Option<&[i32]>,
    ) -> Result<CompanyWithAthletes> {
        let mut tx = self.pool.begin().await?;

        let company = sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies
            SET name = $2,
                description = $3
            WHERE id = $1
            RETURNING id, name, description
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.description)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        if let Some(athlete_ids) = athletes {
            sqlx::query(
                "UPDATE athletes SET company_id = NULL WHERE company_id = $1 AND NOT (id = ANY($2))",
            )
            .bind(id)
            .bind(athlete_ids)
            .execute(&mut *tx)
            .await?;

            sqlx::query("UPDATE athletes SET company_id = $1 WHERE id = ANY($2)")
                .bind(id)
                .bind(athlete_ids)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        let athletes = self.athletes_of(id).await?;
        Ok(CompanyWithAthletes { company, athletes })
    }

    /// Delete a company. Athletes keep their (now dangling) `company_id`.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
