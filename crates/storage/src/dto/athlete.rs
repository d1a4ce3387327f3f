use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use super::provided;
use crate::models::Athlete;

/// Request payload for creating a new athlete
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAthleteRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<f64>,
}

impl CreateAthleteRequest {
    /// Build the candidate, or `None` if a required field is absent.
    pub fn into_candidate(self) -> Option<AthleteCandidate> {
        Some(AthleteCandidate {
            first_name: provided(self.first_name)?,
            last_name: provided(self.last_name)?,
            age: self.age?,
        })
    }
}

/// Request payload for updating an existing athlete. Omitted fields keep
/// their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAthleteRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<f64>,
    /// Kept loose so a non-numeric value can be reported instead of
    /// failing body parsing.
    #[schema(value_type = Option<i32>)]
    pub company_id: Option<serde_json::Value>,
}

impl UpdateAthleteRequest {
    /// Interpret `companyId`: `Ok(None)` when absent or null, `Ok(Some(id))`
    /// for an integer that fits an id.
    pub fn company_id(&self) -> Result<Option<i32>, InvalidCompanyId> {
        match &self.company_id {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::Number(n)) => n
                .as_i64()
                .and_then(|id| i32::try_from(id).ok())
                .map(Some)
                .ok_or(InvalidCompanyId),
            Some(_) => Err(InvalidCompanyId),
        }
    }

    /// Overlay the supplied fields on the stored athlete.
    pub fn merge(&self, existing: &Athlete) -> AthleteCandidate {
        AthleteCandidate {
            first_name: provided(self.first_name.clone())
                .unwrap_or_else(|| existing.first_name.clone()),
            last_name: provided(self.last_name.clone())
                .unwrap_or_else(|| existing.last_name.clone()),
            age: self.age.unwrap_or(f64::from(existing.age)),
        }
    }
}

/// `companyId` was supplied but is not an integer id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCompanyId;

/// Athlete fields as they will be written, checked before persistence.
#[derive(Debug, Clone, Validate)]
pub struct AthleteCandidate {
    pub first_name: String,
    pub last_name: String,

    #[validate(range(min = 12.0, message = "age must not be less than 12"))]
    pub age: f64,
}

impl AthleteCandidate {
    /// Run every athlete rule, including the integer check that the
    /// declarative range rule cannot express.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if !is_integer(self.age) {
            let mut error = ValidationError::new("isInt");
            error.message = Some(Cow::Borrowed("age must be an integer number"));
            errors.add("age", error);
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Age as stored. Only meaningful once `check` has passed.
    pub fn age(&self) -> i32 {
        self.age as i32
    }
}

fn is_integer(value: f64) -> bool {
    value.is_finite()
        && value.fract() == 0.0
        && value >= f64::from(i32::MIN)
        && value <= f64::from(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(age: f64) -> AthleteCandidate {
        AthleteCandidate {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            age,
        }
    }

    fn age_constraints(errors: &ValidationErrors) -> Vec<String> {
        errors
            .field_errors()
            .get("age")
            .map(|errs| {
                errs.iter()
                    .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn twelve_is_the_minimum_age() {
        assert!(candidate(12.0).check().is_ok());

        let errors = candidate(11.0).check().unwrap_err();
        assert_eq!(age_constraints(&errors), vec!["age must not be less than 12"]);
    }

    #[test]
    fn fractional_age_is_not_an_integer() {
        let errors = candidate(12.5).check().unwrap_err();
        assert_eq!(age_constraints(&errors), vec!["age must be an integer number"]);
    }

    #[test]
    fn missing_fields_yield_no_candidate() {
        let req = CreateAthleteRequest {
            first_name: Some("Ada".into()),
            last_name: Some(String::new()),
            age: Some(20.0),
        };
        assert!(req.into_candidate().is_none());
    }

    #[test]
    fn zero_age_counts_as_present() {
        let req = CreateAthleteRequest {
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            age: Some(0.0),
        };
        assert!(req.into_candidate().is_some());
    }

    #[test]
    fn merge_keeps_omitted_fields() {
        let existing = Athlete {
            id: 3,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            age: 30,
            company_id: None,
        };
        let update = UpdateAthleteRequest {
            last_name: Some("Byron".into()),
            ..Default::default()
        };

        let merged = update.merge(&existing);
        assert_eq!(merged.first_name, "Ada");
        assert_eq!(merged.last_name, "Byron");
        assert_eq!(merged.age(), 30);
    }

    #[test]
    fn company_id_must_be_an_integer() {
        let parse = |value: serde_json::Value| UpdateAthleteRequest {
            company_id: Some(value),
            ..Default::default()
        }
        .company_id();

        assert_eq!(parse(serde_json::json!(4)), Ok(Some(4)));
        assert_eq!(parse(serde_json::Value::Null), Ok(None));
        assert_eq!(parse(serde_json::json!("4")), Err(InvalidCompanyId));
        assert_eq!(parse(serde_json::json!(1.5)), Err(InvalidCompanyId));
        assert_eq!(UpdateAthleteRequest::default().company_id(), Ok(None));
    }

    #[test]
    fn deserializes_camel_case_body() {
        let req: UpdateAthleteRequest =
            serde_json::from_str(r#"{"firstName":"Grace","companyId":2}"#).unwrap();
        assert_eq!(req.first_name.as_deref(), Some("Grace"));
        assert_eq!(req.company_id(), Ok(Some(2)));
    }
}
