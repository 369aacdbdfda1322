use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::search::SearchEngine;

use super::handlers::*;

/// Application state shared across all handlers
pub struct AppState {
    pub engine: SearchEngine,
}

/// Create the HTTP router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        // Catalog
        .route("/v1/movies", get(list_movies))
        .route("/v1/movies/search", get(search_movies))
        .route("/v1/movies/:id", get(get_movie))
        // Health
        .route("/health", get(health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
