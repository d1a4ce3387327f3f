use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use super::handlers::{
    create_company, delete_company, get_company, list_companies, update_company,
};
use crate::middleware::auth::require_token;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_company))
        .route("/:id", put(update_company).delete(delete_company))
        // The layer also guards the 405 fallback, so an unknown method on
        // these paths answers with the token envelope until a token is sent.
        .route_layer(middleware::from_fn_with_state(state, require_token));

    Router::new()
        .route("/", get(list_companies))
        .route("/:id", get(get_company))
        .merge(protected)
}
