pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::flow::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/health", get(health::health_handler))
        .route("/webhook", post(handlers::handle_webhook))
        .with_state(state)
}
