pub mod health;
pub mod resume;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use resume_contract::{API_PREFIX, HEALTH_PATH, PING_PATH, RESUME_PATH};

use crate::state::AppState;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(HEALTH_PATH, get(health::health_handler))
        .route(PING_PATH, get(health::ping_handler))
        .route(
            &format!("{RESUME_PATH}/:id"),
            get(resume::handle_get_resume).put(resume::handle_put_resume),
        );

    Router::new()
        .nest(API_PREFIX, api)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
