//! Query results

use serde::Serialize;

use crate::film::Film;

/// Ordered, possibly empty list of films returned by a query.
///
/// Serializes as `{"result": [...]}`; the counters are for logging only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Films in result order
    pub result: Vec<Film>,
    /// Number of films examined
    #[serde(skip)]
    pub scanned_count: usize,
    /// Number of films that passed the filters, before the limit
    #[serde(skip)]
    pub matched_count: usize,
    /// Whether the limit removed any film
    #[serde(skip)]
    pub limit_applied: bool,
}

impl SearchResult {
    /// Wraps films with no execution counters
    pub fn new(result: Vec<Film>) -> Self {
        let matched_count = result.len();
        Self {
            result,
            scanned_count: matched_count,
            matched_count,
            limit_applied: false,
        }
    }

    /// Creates an empty result
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns true if no film matched
    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    /// Returns the number of films
    pub fn len(&self) -> usize {
        self.result.len()
    }

    /// Returns an iterator over the films
    pub fn iter(&self) -> impl Iterator<Item = &Film> {
        self.result.iter()
    }

    /// Consumes the result, returning the films
    pub fn into_films(self) -> Vec<Film> {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_serializes_as_empty_array() {
        let result = SearchResult::empty();
        assert!(result.is_empty());
        assert_eq!(serde_json::to_string(&result).unwrap(), "{\"result\":[]}");
    }

    #[test]
    fn test_counters_not_serialized() {
        let result = SearchResult::new(vec![Film::new("Balance", 1989, 1, 1, false, 42)]);
        let json = serde_json::to_value(&result).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(json["result"][0]["title"], "Balance");
    }
}
