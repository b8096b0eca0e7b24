use axum::Router;

use crate::state::AppState;

use super::handlers;

pub fn create_router(state: AppState) -> Router {
    use axum::routing::{get, post, put};

    Router::new()
        // Channel endpoints
        .route("/api/channels", post(handlers::add_channel))
        .route(
            "/api/channels/unverified",
            get(handlers::get_unverified_channels),
        )
        .route("/api/channels/{channel_id}", get(handlers::get_channel))
        .route(
            "/api/channels/{channel_id}/verify",
            put(handlers::update_verification),
        )
        // API documentation
        .route("/api/openapi.json", get(handlers::openapi_document))
        .with_state(state)
}
