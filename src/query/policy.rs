//! Matching and ordering policy used by the engine

use crate::film::Film;

use super::search::SearchQuery;
use super::sort::{comparator, FilmComparator, SortKey};

/// Decides which films match a query and how survivors are ordered
pub trait SearchPolicy {
    /// Returns true if `film` passes every filter of `query`
    fn matches(&self, film: &Film, query: &SearchQuery) -> bool;

    /// Returns the ascending order for `sort_by`
    fn comparator(&self, sort_by: SortKey) -> FilmComparator;
}

/// AND over all active filters, single-key ascending order
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSearchPolicy;

impl SearchPolicy for StandardSearchPolicy {
    fn matches(&self, film: &Film, query: &SearchQuery) -> bool {
        query.matches(film)
    }

    fn comparator(&self, sort_by: SortKey) -> FilmComparator {
        comparator(sort_by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_matches_title() {
        let film = Film::new("Film title2", 1995, 5, 23, false, 1);

        let mut query = SearchQuery::new();
        query.set_title(Some("Film title2".into()));
        assert!(StandardSearchPolicy.matches(&film, &query));

        query.set_title(Some("Film title3".into()));
        assert!(!StandardSearchPolicy.matches(&film, &query));
    }

    #[test]
    fn test_comparator_selection() {
        let a = Film::new("A", 2000, 9, 1, false, 0);
        let b = Film::new("B", 1990, 1, 9, false, 0);

        let policy = StandardSearchPolicy;
        assert_eq!(policy.comparator(SortKey::Title)(&a, &b), Ordering::Less);
        assert_eq!(policy.comparator(SortKey::Year)(&a, &b), Ordering::Greater);
        assert_eq!(policy.comparator(SortKey::Awards)(&a, &b), Ordering::Greater);
        assert_eq!(policy.comparator(SortKey::Nominations)(&a, &b), Ordering::Less);
    }
}
