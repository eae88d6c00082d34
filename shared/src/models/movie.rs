//! Movie Model

use serde::{Deserialize, Serialize};

use super::{non_blank, optional_text};

/// Movie entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    #[serde(default, deserialize_with = "optional_text")]
    pub title: Option<String>,
    /// ISO date, `YYYY-MM-DD`
    #[serde(default, deserialize_with = "optional_text")]
    pub release_date: Option<String>,
    /// Poster image URL
    #[serde(default, deserialize_with = "optional_text")]
    pub poster: Option<String>,
    #[serde(default)]
    pub actors: Vec<ActorRef>,
}

impl Movie {
    /// Release year, the leading segment of the release date
    pub fn year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.split('-').next())
            .filter(|year| !year.is_empty())
    }

    /// Display title, empty when the backend has none
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}

/// Actor as referenced from a movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorRef {
    pub id: i64,
    pub name: String,
}

/// Create/update movie payload (POST and PATCH share the shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePayload {
    pub title: Option<String>,
    pub release_date: Option<String>,
    /// Actor names, resolved by the backend
    pub actors: Vec<String>,
    pub poster: Option<String>,
}

impl MoviePayload {
    /// Build from raw form text; blank fields become `None`
    pub fn new(title: &str, release_date: &str, actors: Vec<String>, poster: &str) -> Self {
        Self {
            title: non_blank(title),
            release_date: non_blank(release_date),
            actors,
            poster: non_blank(poster),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_movie() {
        let json = r#"{
            "id": 7,
            "title": "Heat",
            "release_date": "1995-12-15",
            "poster": null,
            "actors": [{"id": 1, "name": "Al Pacino"}]
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.display_title(), "Heat");
        assert_eq!(movie.year(), Some("1995"));
        assert_eq!(movie.poster, None);
        assert_eq!(movie.actors[0].name, "Al Pacino");
    }

    #[test]
    fn test_missing_date_literal_is_absent() {
        let json = r#"{"id": 1, "title": "Untitled", "release_date": "None", "poster": "", "actors": []}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.release_date, None);
        assert_eq!(movie.year(), None);
        assert_eq!(movie.poster, None);
    }

    #[test]
    fn test_payload_serializes_blank_as_null() {
        let payload = MoviePayload::new("Heat", "", vec!["Al Pacino".into()], "  ");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Heat",
                "release_date": null,
                "actors": ["Al Pacino"],
                "poster": null
            })
        );
    }
}
