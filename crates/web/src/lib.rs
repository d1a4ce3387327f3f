pub mod config;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod features;
pub mod middleware;
pub mod openapi;
pub mod state;
pub mod token;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use openapi::ApiDoc;
use state::AppState;

/// Build the full API: `/auth`, `/athlete`, `/company` and the Swagger UI.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/auth", features::auth::routes())
        .nest("/athlete", features::athletes::routes(state.clone()))
        .nest("/company", features::companies::routes(state.clone()))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
