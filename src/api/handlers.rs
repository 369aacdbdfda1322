use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::types::*;
use crate::models::{MovieId, MovieQuery};

use super::router::AppState;

/// Error wrapper for API handlers.
///
/// The query engine itself has no error path: absent records and empty
/// results are ordinary values. Translating them into user-facing responses
/// happens here.
pub enum ApiError {
    MovieNotFound(MovieId),
    InvalidId(MovieId),
    NoCriteria,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::MovieNotFound(id) => (
                StatusCode::NOT_FOUND,
                "movie_not_found",
                format!("Movie with id {} was not found", id),
            ),
            ApiError::InvalidId(id) => (
                StatusCode::BAD_REQUEST,
                "invalid_id",
                format!("Invalid movie id {}: ids must be greater than 0", id),
            ),
            ApiError::NoCriteria => (
                StatusCode::BAD_REQUEST,
                "no_criteria",
                "Provide at least one search criterion: name, id or genre".to_string(),
            ),
        };

        let error_response = ErrorResponse::new(error_type, message);
        (status, Json(error_response)).into_response()
    }
}

/// List the full catalog
pub async fn list_movies(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    info!("Fetching all movies");
    Json(state.engine.catalog().all().to_vec())
}

/// Search the catalog by name, id and/or genre
pub async fn search_movies(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MovieQuery>,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(id) = query.id {
        if id <= 0 {
            return Err(ApiError::InvalidId(id));
        }
    }
    if !query.has_criteria() {
        return Err(ApiError::NoCriteria);
    }

    let results: Vec<_> = state.engine.search(&query).into_iter().cloned().collect();

    Ok(Json(SearchResponse {
        total_hits: results.len(),
        results,
    }))
}

/// Get a movie by id
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<MovieId>,
) -> Result<impl IntoResponse, ApiError> {
    match state.engine.catalog().get(id) {
        Some(movie) => Ok(Json(movie.clone())),
        None => Err(ApiError::MovieNotFound(id)),
    }
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
    })
}
