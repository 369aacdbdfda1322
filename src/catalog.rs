//! Immutable movie catalog: load-ordered records plus an identifier index.
//!
//! The catalog is built once at startup and never mutated afterwards, which
//! makes unsynchronized concurrent reads safe; handlers share it behind an
//! `Arc`.

use std::collections::HashMap;
use std::path::Path;

use tracing::{error, info};

use crate::loader;
use crate::models::{Movie, MovieId};

/// The movie catalog: every record in load order, with O(1) lookup by id.
#[derive(Debug, Default)]
pub struct MovieCatalog {
    movies: Vec<Movie>,
    index: HashMap<MovieId, usize>,
}

impl MovieCatalog {
    /// Build a catalog from a sequence of records.
    ///
    /// Records keep their load order. The id index is filled in that same
    /// order, so when the source contains duplicate identifiers the last
    /// occurrence wins for [`get`](Self::get); `all` still returns every
    /// record.
    pub fn new(movies: Vec<Movie>) -> Self {
        let mut index = HashMap::with_capacity(movies.len());
        for (pos, movie) in movies.iter().enumerate() {
            index.insert(movie.id, pos);
        }
        Self { movies, index }
    }

    /// An empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from a JSON file.
    ///
    /// A missing or malformed source is not an error: the failure is logged
    /// and the catalog comes up empty, so callers always get a usable
    /// catalog.
    pub fn load_from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match loader::movies_from_path(path) {
            Ok(movies) => {
                info!("Loaded {} movies from {}", movies.len(), path.display());
                Self::new(movies)
            }
            Err(e) => {
                error!(
                    "Failed to load movies from {}: {}. Starting with an empty catalog.",
                    path.display(),
                    e
                );
                Self::empty()
            }
        }
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Self {
        Self::new(loader::builtin_movies())
    }

    /// Full record sequence, in load order. Callers must not rely on being
    /// able to mutate it; clones are cheap enough where copies are needed.
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    /// Look up a single record by identifier.
    ///
    /// Fails closed: non-positive and unknown identifiers return `None`
    /// rather than an error.
    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        if id <= 0 {
            return None;
        }
        self.index.get(&id).map(|&pos| &self.movies[pos])
    }

    /// Number of records in the catalog
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// True when the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: MovieId, name: &str, genre: &str) -> Movie {
        Movie {
            id,
            name: name.to_string(),
            director: "Test Director".to_string(),
            year: 2000,
            genre: genre.to_string(),
            description: "Test description".to_string(),
            duration: 120,
            rating: 7.5,
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = MovieCatalog::new(vec![
            movie(1, "The Prison Escape", "Drama"),
            movie(2, "The Family Boss", "Crime"),
        ]);

        assert_eq!(catalog.get(1).unwrap().name, "The Prison Escape");
        assert_eq!(catalog.get(2).unwrap().name, "The Family Boss");
        assert!(catalog.get(999).is_none());
    }

    #[test]
    fn test_get_fails_closed_on_non_positive_ids() {
        let catalog = MovieCatalog::new(vec![movie(1, "The Prison Escape", "Drama")]);

        assert!(catalog.get(0).is_none());
        assert!(catalog.get(-1).is_none());
    }

    #[test]
    fn test_all_preserves_load_order() {
        let catalog = MovieCatalog::new(vec![
            movie(3, "Third", "Drama"),
            movie(1, "First", "Crime"),
            movie(2, "Second", "Action"),
        ]);

        let ids: Vec<MovieId> = catalog.all().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_duplicate_id_last_occurrence_wins() {
        let catalog = MovieCatalog::new(vec![
            movie(1, "Original", "Drama"),
            movie(1, "Replacement", "Crime"),
        ]);

        // The full sequence keeps both records; the index points at the later one.
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().name, "Replacement");
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = MovieCatalog::empty();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.all().is_empty());
        assert!(catalog.get(1).is_none());
    }

    #[test]
    fn test_load_from_missing_path_yields_empty_catalog() {
        let catalog = MovieCatalog::load_from_path("/definitely/not/a/real/path.json");
        assert!(catalog.is_empty());
    }
}
