use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::provided;

/// Request payload for creating a new company
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCompanyRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CreateCompanyRequest {
    pub fn into_candidate(self) -> Option<CompanyCandidate> {
        Some(CompanyCandidate {
            name: provided(self.name)?,
            description: provided(self.description)?,
        })
    }
}

/// Request payload for updating a company. Name and description are always
/// required; `athletes`, when given, replaces the whole athlete set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCompanyRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub athletes: Option<Vec<i32>>,
}

impl UpdateCompanyRequest {
    pub fn into_parts(self) -> Option<(CompanyCandidate, Option<Vec<i32>>)> {
        let candidate = CompanyCandidate {
            name: provided(self.name)?,
            description: provided(self.description)?,
        };
        Some((candidate, self.athletes))
    }
}

#[derive(Debug, Clone, Validate)]
pub struct CompanyCandidate {
    #[validate(length(min = 1, message = "name should not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "description should not be empty"))]
    pub description: String,
}
