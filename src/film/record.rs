//! The film record

use serde::Serialize;

/// One film entry of the catalog.
///
/// Serializes with the public field names and order
/// (`title, year, awards, nominations, isBestPicture, numberOfReferences`).
/// A film without a title omits the key entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub year: i32,
    pub awards: i32,
    pub nominations: i32,
    pub is_best_picture: bool,
    pub number_of_references: i32,
}

impl Film {
    /// Creates a titled film
    pub fn new(
        title: impl Into<String>,
        year: i32,
        awards: i32,
        nominations: i32,
        is_best_picture: bool,
        number_of_references: i32,
    ) -> Self {
        Self {
            title: Some(title.into()),
            year,
            awards,
            nominations,
            is_best_picture,
            number_of_references,
        }
    }

    /// Returns the title, if the source carried one
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_order() {
        let film = Film::new("Ford v Ferrari", 2019, 2, 4, false, 1929);
        let json = serde_json::to_string(&film).unwrap();
        assert_eq!(
            json,
            "{\"title\":\"Ford v Ferrari\",\"year\":2019,\"awards\":2,\"nominations\":4,\
             \"isBestPicture\":false,\"numberOfReferences\":1929}"
        );
    }

    #[test]
    fn test_untitled_film_omits_title() {
        let mut film = Film::new("x", 1950, 1, 1, false, 3);
        film.title = None;
        let json = serde_json::to_value(&film).unwrap();
        assert!(json.get("title").is_none());
        assert_eq!(json["year"], 1950);
    }
}
