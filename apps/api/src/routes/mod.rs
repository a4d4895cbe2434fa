pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::compatibility::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/check-compatibility",
            post(handlers::handle_check_compatibility),
        )
        .with_state(state)
}
