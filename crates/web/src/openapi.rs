use utoipa::OpenApi;

use crate::envelope::{
    AuthEnvelope, MessageEnvelope, PropertyViolations, ValidationEnvelope,
};
use crate::features::{athletes, auth, companies};
use crate::middleware::auth::TOKEN_HEADER;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handlers::register,
        auth::handlers::login,
        athletes::handlers::list_athletes,
        athletes::handlers::get_athlete,
        athletes::handlers::create_athlete,
        athletes::handlers::update_athlete,
        athletes::handlers::delete_athlete,
        companies::handlers::list_companies,
        companies::handlers::get_company,
        companies::handlers::create_company,
        companies::handlers::update_company,
        companies::handlers::delete_company,
    ),
    components(
        schemas(
            storage::dto::user::Credentials,
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::company::CreateCompanyRequest,
            storage::dto::company::UpdateCompanyRequest,
            storage::models::Athlete,
            storage::models::AthleteWithCompany,
            storage::models::Company,
            storage::models::CompanyWithAthletes,
            storage::models::UserInfo,
            MessageEnvelope,
            AuthEnvelope,
            ValidationEnvelope,
            PropertyViolations,
        )
    ),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "athletes", description = "Athlete endpoints; mutations need a token"),
        (name = "companies", description = "Company endpoints; mutations need a token"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                utoipa::openapi::security::SecurityScheme::ApiKey(
                    utoipa::openapi::security::ApiKey::Header(
                        utoipa::openapi::security::ApiKeyValue::new(TOKEN_HEADER),
                    ),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for path in [
            "/auth/register",
            "/auth/login",
            "/athlete",
            "/athlete/{id}",
            "/company",
            "/company/{id}",
        ] {
            assert!(paths.iter().any(|p| *p == path), "missing {path}");
        }
    }
}
