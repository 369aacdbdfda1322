use serde::{Deserialize, Serialize};

use crate::models::MovieId;
use crate::text;

/// Search criteria for the movie catalog.
///
/// Every field is an independent, optional criterion. `name` and `genre`
/// match as case-insensitive substrings; `id` matches exactly. A criterion
/// left as `None` imposes no constraint, and text criteria that are empty or
/// whitespace-only count as absent.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MovieQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<MovieId>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl MovieQuery {
    /// Create a name-only query
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Create an id-only query
    pub fn by_id(id: MovieId) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Create a genre-only query
    pub fn by_genre(genre: impl Into<String>) -> Self {
        Self {
            genre: Some(genre.into()),
            ..Self::default()
        }
    }

    /// Add a name criterion
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add an id criterion
    pub fn with_id(mut self, id: MovieId) -> Self {
        self.id = Some(id);
        self
    }

    /// Add a genre criterion
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// True when at least one criterion carries a usable value.
    ///
    /// Text criteria that are empty or whitespace-only do not count.
    pub fn has_criteria(&self) -> bool {
        self.id.is_some()
            || self.name.as_deref().is_some_and(|n| !text::is_blank(n))
            || self.genre.as_deref().is_some_and(|g| !text::is_blank(g))
    }
}
