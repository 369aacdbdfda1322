//! Query engine: multi-criteria filter search over the movie catalog.
//!
//! Criteria combine as a conjunction over the supplied fields only; a
//! criterion left absent imposes no constraint. Text criteria match as
//! trimmed, case-folded substrings. A query with zero usable criteria
//! matches nothing rather than everything.

use std::sync::Arc;

use tracing::{info, warn};

use crate::catalog::MovieCatalog;
use crate::models::{Movie, MovieQuery};
use crate::text;

/// Stateless search engine over a shared, immutable catalog.
///
/// Every call is a pure function of the catalog and the supplied criteria,
/// so one engine can serve any number of concurrent callers.
pub struct SearchEngine {
    catalog: Arc<MovieCatalog>,
}

impl SearchEngine {
    /// Create an engine over the given catalog
    pub fn new(catalog: Arc<MovieCatalog>) -> Self {
        Self { catalog }
    }

    /// The catalog this engine reads from
    pub fn catalog(&self) -> &MovieCatalog {
        &self.catalog
    }

    /// Search the catalog with any combination of criteria.
    ///
    /// Returns the matching records in catalog order. Matching is
    /// conjunctive across the supplied criteria: exact equality for `id`,
    /// case-folded substring containment for `name` and `genre`. When all
    /// criteria are absent (including empty/whitespace-only text) the result
    /// is empty by policy.
    pub fn search(&self, query: &MovieQuery) -> Vec<&Movie> {
        info!(
            "Searching movies - name: {:?}, id: {:?}, genre: {:?}",
            query.name, query.id, query.genre
        );

        let name = query.name.as_deref().and_then(text::normalize_term);
        let genre = query.genre.as_deref().and_then(text::normalize_term);

        if name.is_none() && query.id.is_none() && genre.is_none() {
            warn!("No search criteria supplied, returning empty result");
            return Vec::new();
        }

        let results: Vec<&Movie> = self
            .catalog
            .all()
            .iter()
            .filter(|movie| {
                query.id.map_or(true, |id| movie.id == id)
                    && name
                        .as_deref()
                        .map_or(true, |n| text::contains_fold(&movie.name, n))
                    && genre
                        .as_deref()
                        .map_or(true, |g| text::contains_fold(&movie.genre, g))
            })
            .collect();

        if results.is_empty() {
            info!("No movies matched the search criteria");
        } else {
            info!("Found {} matching movies", results.len());
        }

        results
    }

    /// Search by movie name only.
    ///
    /// Empty or whitespace-only input returns an empty result immediately,
    /// without running a search.
    pub fn search_by_name(&self, name: &str) -> Vec<&Movie> {
        if text::is_blank(name) {
            warn!("Empty movie name supplied for search");
            return Vec::new();
        }
        self.search(&MovieQuery::by_name(name))
    }

    /// Search by genre only.
    ///
    /// Empty or whitespace-only input returns an empty result immediately,
    /// without running a search.
    pub fn search_by_genre(&self, genre: &str) -> Vec<&Movie> {
        if text::is_blank(genre) {
            warn!("Empty genre supplied for search");
            return Vec::new();
        }
        self.search(&MovieQuery::by_genre(genre))
    }
}
