use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Athlete;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Company together with every athlete currently pointing at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompanyWithAthletes {
    #[serde(flatten)]
    pub company: Company,
    pub athletes: Vec<Athlete>,
}
