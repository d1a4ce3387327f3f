use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use super::handlers::{
    create_athlete, delete_athlete, get_athlete, list_athletes, update_athlete,
};
use crate::middleware::auth::require_token;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_athlete))
        .route("/:id", put(update_athlete).delete(delete_athlete))
        // The layer also guards the 405 fallback, so an unknown method on
        // these paths answers with the token envelope until a token is sent.
        .route_layer(middleware::from_fn_with_state(state, require_token));

    Router::new()
        .route("/", get(list_athletes))
        .route("/:id", get(get_athlete))
        .merge(protected)
}
