//! Film sources
//!
//! A source turns a container node into the ordered list of films below it.
//! An absent container is reported as `Ok(None)` so callers can tell
//! "no container" apart from "container without films".

use serde_json::Value;

use super::errors::{MappingError, MappingResult};
use super::record::Film;
use super::tree::ResourceTree;

/// Produces the films stored below a container node
pub trait FilmSource {
    /// Loads all films below `root`, or `None` when there is no root
    fn load(&self, root: Option<&Value>) -> MappingResult<Option<Vec<Film>>>;
}

/// Loads films from the child nodes of a JSON resource tree container
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceTreeSource;

impl FilmSource for ResourceTreeSource {
    fn load(&self, root: Option<&Value>) -> MappingResult<Option<Vec<Film>>> {
        let root = match root {
            Some(node) => node,
            None => return Ok(None),
        };

        ResourceTree::children(root)
            .map(|(_, child)| map_node(child))
            .collect::<MappingResult<Vec<_>>>()
            .map(Some)
    }
}

/// Maps a single resource node to a film.
///
/// `title` is optional. The numeric properties accept JSON numbers or decimal
/// strings, `isBestPicture` accepts booleans or `"true"`/`"false"` in any case.
pub fn map_node(node: &Value) -> MappingResult<Film> {
    if !node.is_object() {
        return Err(MappingError::NotANode(node.to_string()));
    }

    Ok(Film {
        title: optional_string(node, "title")?,
        year: required_int(node, "year")?,
        awards: required_int(node, "awards")?,
        nominations: required_int(node, "nominations")?,
        is_best_picture: required_bool(node, "isBestPicture")?,
        number_of_references: required_int(node, "numberOfReferences")?,
    })
}

fn optional_string(node: &Value, field: &'static str) -> MappingResult<Option<String>> {
    match node.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(invalid(field, other)),
    }
}

fn required_int(node: &Value, field: &'static str) -> MappingResult<i32> {
    let value = node.get(field).ok_or(MappingError::MissingField(field))?;

    let parsed = match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.parse::<i32>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| invalid(field, value))
}

fn required_bool(node: &Value, field: &'static str) -> MappingResult<bool> {
    let value = node.get(field).ok_or(MappingError::MissingField(field))?;

    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(invalid(field, value)),
    }
}

fn invalid(field: &'static str, value: &Value) -> MappingError {
    MappingError::InvalidField {
        field,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn container() -> Value {
        json!({
            "jcr:primaryType": "nt:unstructured",
            "sling:resourceType": "test/filmEntryContainer",
            "parasite": {
                "jcr:primaryType": "nt:unstructured",
                "title": "Parasite",
                "year": 2019,
                "awards": 4,
                "nominations": 6,
                "isBestPicture": true,
                "numberOfReferences": 8855
            },
            "ford": {
                "title": "Ford v Ferrari",
                "year": "2019",
                "awards": 2,
                "nominations": 4,
                "isBestPicture": "false",
                "numberOfReferences": 1929
            }
        })
    }

    #[test]
    fn test_no_root_is_none() {
        assert_eq!(ResourceTreeSource.load(None), Ok(None));
    }

    #[test]
    fn test_empty_container_is_empty_list() {
        let node = json!({"jcr:primaryType": "nt:unstructured"});
        assert_eq!(ResourceTreeSource.load(Some(&node)), Ok(Some(vec![])));
    }

    #[test]
    fn test_load_preserves_order_and_coerces_strings() {
        let node = container();
        let films = ResourceTreeSource.load(Some(&node)).unwrap().unwrap();

        assert_eq!(films.len(), 2);
        assert_eq!(films[0].title(), Some("Parasite"));
        assert_eq!(films[1], Film::new("Ford v Ferrari", 2019, 2, 4, false, 1929));
    }

    #[test]
    fn test_missing_required_field() {
        let node = json!({"title": "X", "year": 2000, "awards": 1, "nominations": 1});
        assert_eq!(map_node(&node), Err(MappingError::MissingField("isBestPicture")));
    }

    #[test]
    fn test_invalid_year() {
        let node = json!({
            "title": "X", "year": "soon", "awards": 1, "nominations": 1,
            "isBestPicture": false, "numberOfReferences": 1
        });
        assert!(matches!(
            map_node(&node),
            Err(MappingError::InvalidField { field: "year", .. })
        ));
    }

    #[test]
    fn test_missing_title_is_allowed() {
        let node = json!({
            "year": 1950, "awards": 1, "nominations": 1,
            "isBestPicture": false, "numberOfReferences": 1
        });
        assert_eq!(map_node(&node).unwrap().title, None);
    }

    #[test]
    fn test_namespaced_child_is_mapped() {
        let node = json!({
            "sling:resourceType": "test/filmEntryContainer",
            "film:1": {
                "jcr:primaryType": "nt:unstructured",
                "title": "Moonlight", "year": 2016, "awards": 3, "nominations": 8,
                "isBestPicture": true, "numberOfReferences": 4
            }
        });
        let films = ResourceTreeSource.load(Some(&node)).unwrap().unwrap();
        assert_eq!(films, vec![Film::new("Moonlight", 2016, 3, 8, true, 4)]);
    }

    #[test]
    fn test_metadata_child_fails_load() {
        let node = json!({
            "good": {
                "title": "A", "year": 1950, "awards": 1, "nominations": 1,
                "isBestPicture": false, "numberOfReferences": 1
            },
            "jcr:content": {"jcr:primaryType": "nt:resource"}
        });
        assert_eq!(
            ResourceTreeSource.load(Some(&node)),
            Err(MappingError::MissingField("year"))
        );
    }

    #[test]
    fn test_bad_child_fails_whole_load() {
        let node = json!({
            "good": {
                "title": "A", "year": 1950, "awards": 1, "nominations": 1,
                "isBestPicture": false, "numberOfReferences": 1
            },
            "bad": {"title": "B"}
        });
        assert!(ResourceTreeSource.load(Some(&node)).is_err());
    }
}
