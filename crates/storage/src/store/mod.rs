//! Storage seams used by the web layer.
//!
//! Handlers receive an `Arc<dyn Store>` so the PostgreSQL [`Database`] and the
//! in-process [`MemoryStore`] are interchangeable.

use async_trait::async_trait;

use crate::Database;
use crate::dto::{athlete::AthleteCandidate, company::CompanyCandidate, user::NewUser};
use crate::error::Result;
use crate::models::{Athlete, AthleteWithCompany, Company, CompanyWithAthletes, User};
use crate::repository::{AthleteRepository, CompanyRepository, UserRepository};

pub mod memory;

pub use memory::MemoryStore;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with `ConstraintViolation` when the email is taken.
    async fn create_user(&self, user: &NewUser) -> Result<User>;
    async fn find_user_by_email(&self, email: &str) -> Result<User>;
    async fn find_user_by_id(&self, id: i32) -> Result<User>;
}

#[async_trait]
pub trait CompanyStore: Send + Sync {
    async fn create_company(&self, company: &CompanyCandidate) -> Result<Company>;
    async fn list_companies(&self) -> Result<Vec<Company>>;
    async fn find_company(&self, id: i32) -> Result<Company>;
    async fn find_company_with_athletes(&self, id: i32) -> Result<CompanyWithAthletes>;
    /// `athletes`, when present, becomes the exact set of linked athletes.
    async fn update_company(
        &self,
        id: i32,
        changes: &CompanyCandidate,
        athletes: Option<&[i32]>,
    ) -> Result<CompanyWithAthletes>;
    async fn delete_company(&self, id: i32) -> Result<()>;
}

#[async_trait]
pub trait AthleteStore: Send + Sync {
    async fn create_athlete(&self, athlete: &AthleteCandidate) -> Result<Athlete>;
    async fn list_athletes(&self) -> Result<Vec<Athlete>>;
    async fn find_athlete(&self, id: i32) -> Result<Athlete>;
    async fn find_athlete_with_company(&self, id: i32) -> Result<AthleteWithCompany>;
    async fn update_athlete(&self, athlete: &Athlete) -> Result<Athlete>;
    async fn delete_athlete(&self, id: i32) -> Result<()>;
}

/// Everything the API needs from storage.
pub trait Store: UserStore + CompanyStore + AthleteStore {}

impl<T> Store for T where T: UserStore + CompanyStore + AthleteStore {}

#[async_trait]
impl UserStore for Database {
    async fn create_user(&self, user: &NewUser) -> Result<User> {
        UserRepository::new(self.pool()).create(user).await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<User> {
        UserRepository::new(self.pool()).find_by_email(email).await
    }

    async fn find_user_by_id(&self, id: i32) -> Result<User> {
        UserRepository::new(self.pool()).find_by_id(id).await
    }
}

#[async_trait]
impl CompanyStore for Database {
    async fn create_company(&self, company: &CompanyCandidate) -> Result<Company> {
        CompanyRepository::new(self.pool()).create(company).await
    }

    async fn list_companies(&self) -> Result<Vec<Company>> {
        CompanyRepository::new(self.pool()).list().await
    }

    async fn find_company(&self, id: i32) -> Result<Company> {
        CompanyRepository::new(self.pool()).find_by_id(id).await
    }

    async fn find_company_with_athletes(&self, id: i32) -> Result<CompanyWithAthletes> {
        CompanyRepository::new(self.pool()).find_with_athletes(id).await
    }

    async fn update_company(
        &self,
        id: i32,
        changes: &CompanyCandidate,
        athletes: Option<&[i32]>,
    ) -> Result<CompanyWithAthletes> {
        CompanyRepository::new(self.pool())
            .update(id, changes, athletes)
            .await
    }

    async fn delete_company(&self, id: i32) -> Result<()> {
        CompanyRepository::new(self.pool()).delete(id).await
    }
}

#[async_trait]
impl AthleteStore for Database {
    async fn create_athlete(&self, athlete: &AthleteCandidate) -> Result<Athlete> {
        AthleteRepository::new(self.pool()).create(athlete).await
    }

    async fn list_athletes(&self) -> Result<Vec<Athlete>> {
        AthleteRepository::new(self.pool()).list().await
    }

    async fn find_athlete(&self, id: i32) -> Result<Athlete> {
        AthleteRepository::new(self.pool()).find_by_id(id).await
    }

    async fn find_athlete_with_company(&self, id: i32) -> Result<AthleteWithCompany> {
        AthleteRepository::new(self.pool())
            .find_with_company(id)
            .await
    }

    async fn update_athlete(&self, athlete: &Athlete) -> Result<Athlete> {
        AthleteRepository::new(self.pool()).update(athlete).await
    }

    async fn delete_athlete(&self, id: i32) -> Result<()> {
        AthleteRepository::new(self.pool()).delete(id).await
    }
}
