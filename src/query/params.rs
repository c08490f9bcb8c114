//! Multi-valued request parameters

use std::collections::HashMap;

/// Recognized parameter names
pub mod names {
    pub const TITLE: &str = "title";
    pub const YEAR: &str = "year";
    pub const MIN_YEAR: &str = "minYear";
    pub const MAX_YEAR: &str = "maxYear";
    pub const MIN_AWARDS: &str = "minAwards";
    pub const MAX_AWARDS: &str = "maxAwards";
    pub const NOMINATIONS: &str = "nominations";
    pub const IS_BEST_PICTURE: &str = "isBestPicture";
    pub const SORT_BY: &str = "sortBy";
    pub const LIMIT: &str = "limit";
}

/// Parameter name to submitted values.
///
/// Names keep the order of their first appearance. Values of a repeated name
/// keep submission order, so the last element is the most recent one.
/// Appending and lookup are constant time per value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterMap {
    entries: Vec<(String, Vec<String>)>,
    /// Position of each name in `entries`
    index: HashMap<String, usize>,
}

impl ParameterMap {
    /// Creates an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value under `name`
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.index.get(&name).copied() {
            Some(position) => self.entries[position].1.push(value),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, vec![value]));
            }
        }
    }

    /// Returns all values submitted for `name`
    pub fn get_all(&self, name: &str) -> Option<&[String]> {
        self.index
            .get(name)
            .map(|&position| self.entries[position].1.as_slice())
    }

    /// Returns the most recent value submitted for `name`
    pub fn last_value(&self, name: &str) -> Option<&str> {
        self.get_all(name)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Iterates names with their values
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no parameter was submitted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ParameterMap::new();
        for (name, value) in iter {
            map.append(name, value);
        }
        map
    }
}
