//! In-process store used by the test-suite and by local runs without a
//! `DATABASE_URL`. Ids are assigned sequentially per table, like `SERIAL`.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AthleteStore, CompanyStore, UserStore};
use crate::dto::{athlete::AthleteCandidate, company::CompanyCandidate, user::NewUser};
use crate::error::{Result, StorageError};
use crate::models::{Athlete, AthleteWithCompany, Company, CompanyWithAthletes, User};

#[derive(Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    companies: BTreeMap<i32, Company>,
    athletes: BTreeMap<i32, Athlete>,
    last_user_id: i32,
    last_company_id: i32,
    last_athlete_id: i32,
}

impl Tables {
    fn athletes_of(&self, company_id: i32) -> Vec<Athlete> {
        self.athletes
            .values()
            .filter(|a| a.company_id == Some(company_id))
            .cloned()
            .collect()
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, user: &NewUser) -> Result<User> {
        let mut tables = self.tables.write().await;

        if tables.users.values().any(|u| u.email == user.email) {
            return Err(StorageError::ConstraintViolation(
                "Email already registered".to_string(),
            ));
        }

        tables.last_user_id += 1;
        let user = User {
            id: tables.last_user_id,
            email: user.email.clone(),
            password: user.password.clone(),
        };
        tables.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<User> {
        let tables = self.tables.read().await;
        tables
            .users
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn find_user_by_id(&self, id: i32) -> Result<User> {
        let tables = self.tables.read().await;
        tables.users.get(&id).cloned().ok_or(StorageError::NotFound)
    }
}

#[async_trait]
impl CompanyStore for MemoryStore {
    async fn create_company(&self, company: &CompanyCandidate) -> Result<Company> {
        let mut tables = self.tables.write().await;

        tables.last_company_id += 1;
        let company = Company {
            id: tables.last_company_id,
            name: company.name.clone(),
            description: company.description.clone(),
        };
        tables.companies.insert(company.id, company.clone());

        Ok(company)
    }

    async fn list_companies(&self) -> Result<Vec<Company>> {
        let tables = self.tables.read().await;
        Ok(tables.companies.values().cloned().collect())
    }

    async fn find_company(&self, id: i32) -> Result<Company> {
        let tables = self.tables.read().await;
        tables.companies.get(&id).cloned().ok_or(StorageError::NotFound)
    }

    async fn find_company_with_athletes(&self, id: i32) -> Result<CompanyWithAthletes> {
        let tables = self.tables.read().await;
        let company = tables.companies.get(&id).cloned().ok_or(StorageError::NotFound)?;
        let athletes = tables.athletes_of(id);

        Ok(CompanyWithAthletes { company, athletes })
    }

    async fn update_company(
        &self,
        id: i32,
        changes: &CompanyCandidate,
        athletes: Option<&[i32]>,
    ) -> Result<CompanyWithAthletes> {
        let mut tables = self.tables.write().await;

        let company = tables.companies.get_mut(&id).ok_or(StorageError::NotFound)?;
        company.name = changes.name.clone();
        company.description = changes.description.clone();
        let company = company.clone();

        if let Some(athlete_ids) = athletes {
            for athlete in tables.athletes.values_mut() {
                if athlete_ids.contains(&athlete.id) {
                    athlete.company_id = Some(id);
                } else if athlete.company_id == Some(id) {
                    athlete.company_id = None;
                }
            }
        }

        let athletes = tables.athletes_of(id);
        Ok(CompanyWithAthletes { company, athletes })
    }

    async fn delete_company(&self, id: i32) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables
            .companies
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound)
    }
}

#[async_trait]
impl AthleteStore for MemoryStore {
    async fn create_athlete(&self, athlete: &AthleteCandidate) -> Result<Athlete> {
        let mut tables = self.tables.write().await;

        tables.last_athlete_id += 1;
        let athlete = Athlete {
            id: tables.last_athlete_id,
            first_name: athlete.first_name.clone(),
            last_name: athlete.last_name.clone(),
            age: athlete.age(),
            company_id: None,
        };
        tables.athletes.insert(athlete.id, athlete.clone());

        Ok(athlete)
    }

    async fn list_athletes(&self) -> Result<Vec<Athlete>> {
        let tables = self.tables.read().await;
        Ok(tables.athletes.values().cloned().collect())
    }

    async fn find_athlete(&self, id: i32) -> Result<Athlete> {
        let tables = self.tables.read().await;
        tables.athletes.get(&id).cloned().ok_or(StorageError::NotFound)
    }

    async fn find_athlete_with_company(&self, id: i32) -> Result<AthleteWithCompany> {
        let tables = self.tables.read().await;
        let athlete = tables.athletes.get(&id).cloned().ok_or(StorageError::NotFound)?;
        let company = athlete
            .company_id
            .and_then(|company_id| tables.companies.get(&company_id).cloned());

        Ok(AthleteWithCompany { athlete, company })
    }

    async fn update_athlete(&self, athlete: &Athlete) -> Result<Athlete> {
        let mut tables = self.tables.write().await;
        let stored = tables
            .athletes
            .get_mut(&athlete.id)
            .ok_or(StorageError::NotFound)?;
        *stored = athlete.clone();

        Ok(athlete.clone())
    }

    async fn delete_athlete(&self, id: i32) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables
            .athletes
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn athlete(first_name: &str) -> AthleteCandidate {
        AthleteCandidate {
            first_name: first_name.into(),
            last_name: "Doe".into(),
            age: 20.0,
        }
    }

    fn company(name: &str) -> CompanyCandidate {
        CompanyCandidate {
            name: name.into(),
            description: "desc".into(),
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_a_constraint_violation() {
        let store = MemoryStore::new();
        let user = NewUser {
            email: "a@example.com".into(),
            password: "secret".into(),
        };

        store.create_user(&user).await.unwrap();
        let err = store.create_user(&user).await.unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn ids_are_sequential_per_table() {
        let store = MemoryStore::new();
        let first = store.create_athlete(&athlete("A")).await.unwrap();
        let second = store.create_athlete(&athlete("B")).await.unwrap();
        let acme = store.create_company(&company("Acme")).await.unwrap();

        assert_eq!((first.id, second.id, acme.id), (1, 2, 1));
    }

    #[tokio::test]
    async fn company_update_replaces_athlete_set() {
        let store = MemoryStore::new();
        let a = store.create_athlete(&athlete("A")).await.unwrap();
        let b = store.create_athlete(&athlete("B")).await.unwrap();
        let acme = store.create_company(&company("Acme")).await.unwrap();

        let updated = store
            .update_company(acme.id, &company("Acme"), Some(&[a.id, 99]))
            .await
            .unwrap();
        assert_eq!(updated.athletes.len(), 1);

        let updated = store
            .update_company(acme.id, &company("Acme"), Some(&[b.id]))
            .await
            .unwrap();
        assert_eq!(updated.athletes[0].id, b.id);
        assert_eq!(store.find_athlete(a.id).await.unwrap().company_id, None);

        let cleared = store
            .update_company(acme.id, &company("Acme"), Some(&[]))
            .await
            .unwrap();
        assert!(cleared.athletes.is_empty());
    }

    #[tokio::test]
    async fn deleting_company_leaves_dangling_reference() {
        let store = MemoryStore::new();
        let a = store.create_athlete(&athlete("A")).await.unwrap();
        let acme = store.create_company(&company("Acme")).await.unwrap();
        store
            .update_company(acme.id, &company("Acme"), Some(&[a.id]))
            .await
            .unwrap();

        store.delete_company(acme.id).await.unwrap();

        let found = store.find_athlete_with_company(a.id).await.unwrap();
        assert_eq!(found.athlete.company_id, Some(acme.id));
        assert!(found.company.is_none());
    }
}
