use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Company;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Athlete {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    /// May reference a company that has since been deleted.
    pub company_id: Option<i32>,
}

/// Athlete with its company resolved. `company` is `None` both when the
/// athlete has no company and when `company_id` is dangling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AthleteWithCompany {
    #[serde(flatten)]
    pub athlete: Athlete,
    pub company: Option<Company>,
}
