use serde::{Deserialize, Serialize};

/// Unique movie identifier
///
/// Signed to match the ingestion contract; identifiers at or below zero
/// never resolve to a record.
pub type MovieId = i64;

/// One movie's catalog entry.
///
/// Field names on the wire follow the ingestion contract: `movieName` and
/// `imdbRating`, everything else as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    #[serde(rename = "movieName")]
    pub name: String,
    pub director: String,
    pub year: u32,
    pub genre: String,
    pub description: String,
    pub duration: u32,
    #[serde(rename = "imdbRating")]
    pub rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_deserializes_wire_names() {
        let json = r#"{
            "id": 1,
            "movieName": "The Prison Escape",
            "director": "John Director",
            "year": 1994,
            "genre": "Drama",
            "description": "A banker befriends a fellow inmate over two decades behind bars.",
            "duration": 142,
            "imdbRating": 9.3
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 1);
        assert_eq!(movie.name, "The Prison Escape");
        assert_eq!(movie.director, "John Director");
        assert_eq!(movie.year, 1994);
        assert_eq!(movie.genre, "Drama");
        assert_eq!(movie.duration, 142);
        assert_eq!(movie.rating, 9.3);
    }

    #[test]
    fn test_movie_serializes_wire_names() {
        let movie = Movie {
            id: 7,
            name: "Space Odyssey Beyond".to_string(),
            director: "Stanley Visionary".to_string(),
            year: 1968,
            genre: "Sci-Fi".to_string(),
            description: "A voyage to Jupiter goes wrong.".to_string(),
            duration: 149,
            rating: 8.3,
        };

        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(value["movieName"], "Space Odyssey Beyond");
        assert_eq!(value["imdbRating"], 8.3);
        assert!(value.get("name").is_none());
        assert!(value.get("rating").is_none());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{ "id": 1, "movieName": "No Director" }"#;
        assert!(serde_json::from_str::<Movie>(json).is_err());
    }
}
