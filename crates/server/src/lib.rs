//! HTTP API for the curriculum tracker.
//!
//! Two operations: fetch the full curriculum tree and flip one topic's
//! completed flag. Both are direct pass-throughs to the repository.

#![forbid(unsafe_code)]

pub mod error;
pub mod routes;

use axum::{
    Router,
    routing::{get, patch},
};
use storage::repository::Storage;
use tower_http::trace::TraceLayer;

/// State shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
}

/// Create the API router.
pub fn create_router(storage: Storage) -> Router {
    Router::new()
        .route("/api/curriculum", get(routes::get_curriculum))
        .route("/api/topics/:id/toggle", patch(routes::toggle_topic))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { storage })
}
