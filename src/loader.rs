//! Catalog ingestion: JSON array of movie records under the wire field
//! names (`movieName`, `imdbRating`, ...).
//!
//! The strict entry points return errors for callers that need the cause;
//! catalog construction turns any failure into an empty catalog instead of
//! propagating it.

use std::fs;
use std::path::Path;

use tracing::error;

use crate::error::Result;
use crate::models::Movie;

/// Movie data bundled with the crate.
const BUILTIN_JSON: &str = include_str!("../data/movies.json");

/// Parse a JSON array of movie records.
pub fn movies_from_json(json: &str) -> Result<Vec<Movie>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a JSON catalog file.
pub fn movies_from_path(path: impl AsRef<Path>) -> Result<Vec<Movie>> {
    let json = fs::read_to_string(path)?;
    movies_from_json(&json)
}

/// The bundled movie records.
///
/// The dataset is compiled into the binary, so parsing only fails if the
/// bundled file itself is broken; that case degrades to an empty list like
/// any other ingestion failure.
pub fn builtin_movies() -> Vec<Movie> {
    match movies_from_json(BUILTIN_JSON) {
        Ok(movies) => movies,
        Err(e) => {
            error!("Bundled movie data is malformed: {}", e);
            Vec::new()
        }
    }
}
