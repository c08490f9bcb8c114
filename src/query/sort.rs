//! Sort keys and film ordering
//!
//! All orderings are ascending. Sorting is stable, so films comparing equal
//! keep their input order; there is no secondary key.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::film::Film;

use super::errors::QueryError;

/// Supported sort keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Title,
    Year,
    Awards,
    Nominations,
    /// Accepted literal that falls back to title order
    Unknown,
}

impl SortKey {
    /// Returns the canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "TITLE",
            SortKey::Year => "YEAR",
            SortKey::Awards => "AWARDS",
            SortKey::Nominations => "NOMINATIONS",
            SortKey::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    /// Upper-cases the input and matches it against the key names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TITLE" => Ok(SortKey::Title),
            "YEAR" => Ok(SortKey::Year),
            "AWARDS" => Ok(SortKey::Awards),
            "NOMINATIONS" => Ok(SortKey::Nominations),
            "UNKNOWN" => Ok(SortKey::Unknown),
            _ => Err(QueryError::UnknownSortKey(s.to_string())),
        }
    }
}

/// Total order over films
pub type FilmComparator = fn(&Film, &Film) -> Ordering;

/// Selects the comparator for a sort key
pub fn comparator(key: SortKey) -> FilmComparator {
    match key {
        SortKey::Awards => by_awards,
        SortKey::Nominations => by_nominations,
        SortKey::Year => by_year,
        SortKey::Title | SortKey::Unknown => by_title,
    }
}

/// Sorts films in place by `key`, stably
pub fn sort_films(films: &mut [Film], key: SortKey) {
    films.sort_by(comparator(key));
}

fn by_awards(a: &Film, b: &Film) -> Ordering {
    a.awards.cmp(&b.awards)
}

fn by_nominations(a: &Film, b: &Film) -> Ordering {
    a.nominations.cmp(&b.nominations)
}

fn by_year(a: &Film, b: &Film) -> Ordering {
    a.year.cmp(&b.year)
}

/// Lexical by title; untitled films first
fn by_title(a: &Film, b: &Film) -> Ordering {
    a.title().cmp(&b.title())
}
