use thiserror::Error;

use crate::models::MovieId;

/// Main error type for moviedex operations
#[derive(Error, Debug)]
pub enum MoviedexError {
    #[error("Movie not found: {0}")]
    MovieNotFound(MovieId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog data: {0}")]
    MalformedCatalog(#[from] serde_json::Error),
}

/// Result type alias for moviedex operations
pub type Result<T> = std::result::Result<T, MoviedexError>;
