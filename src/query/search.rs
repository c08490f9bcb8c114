//! Search queries
//!
//! A `SearchQuery` owns at most one filter per [`FilterKind`]. The set of
//! active filters is always exactly the set of fields holding a value:
//! setting a field installs or replaces its filter, clearing it removes the
//! filter. Setters are independent of each other, so any combination of
//! filters can be active at once.

use std::collections::BTreeMap;

use crate::film::Film;

use super::errors::{QueryError, QueryResult};
use super::filters::{FilmFilter, FilterKind};
use super::params::names;
use super::sort::SortKey;

/// Parsed query: active filters, sort key and optional limit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    filters: BTreeMap<FilterKind, FilmFilter>,
    sort_by: SortKey,
    limit: Option<u32>,
}

impl SearchQuery {
    /// Creates a query with no filters, title order and no limit
    pub fn new() -> Self {
        Self::default()
    }

    // Filter setters

    pub fn set_title(&mut self, title: Option<String>) {
        self.update(FilterKind::Title, title.map(FilmFilter::Title));
    }

    pub fn set_year(&mut self, year: Option<i32>) {
        self.update(FilterKind::Year, year.map(FilmFilter::Year));
    }

    pub fn set_min_year(&mut self, min_year: Option<i32>) {
        self.update(FilterKind::MinYear, min_year.map(FilmFilter::MinYear));
    }

    pub fn set_max_year(&mut self, max_year: Option<i32>) {
        self.update(FilterKind::MaxYear, max_year.map(FilmFilter::MaxYear));
    }

    /// Fails with `NegativeBound` if the value is negative
    pub fn set_min_awards(&mut self, min_awards: Option<i32>) -> QueryResult<()> {
        let min_awards = non_negative(names::MIN_AWARDS, min_awards)?;
        self.update(FilterKind::MinAwards, min_awards.map(FilmFilter::MinAwards));
        Ok(())
    }

    /// Fails with `NegativeBound` if the value is negative
    pub fn set_max_awards(&mut self, max_awards: Option<i32>) -> QueryResult<()> {
        let max_awards = non_negative(names::MAX_AWARDS, max_awards)?;
        self.update(FilterKind::MaxAwards, max_awards.map(FilmFilter::MaxAwards));
        Ok(())
    }

    /// Fails with `NegativeBound` if the value is negative
    pub fn set_nominations(&mut self, nominations: Option<i32>) -> QueryResult<()> {
        let nominations = non_negative(names::NOMINATIONS, nominations)?;
        self.update(
            FilterKind::Nominations,
            nominations.map(FilmFilter::Nominations),
        );
        Ok(())
    }

    pub fn set_is_best_picture(&mut self, is_best_picture: Option<bool>) {
        self.update(
            FilterKind::IsBestPicture,
            is_best_picture.map(FilmFilter::IsBestPicture),
        );
    }

    // Non-filter settings

    pub fn set_sort_by(&mut self, sort_by: SortKey) {
        self.sort_by = sort_by;
    }

    /// Fails with `NegativeBound` if the value is negative
    pub fn set_limit(&mut self, limit: Option<i32>) -> QueryResult<()> {
        self.limit = match limit {
            Some(value) => Some(
                u32::try_from(value)
                    .map_err(|_| QueryError::NegativeBound { parameter: names::LIMIT })?,
            ),
            None => None,
        };
        Ok(())
    }

    fn update(&mut self, kind: FilterKind, filter: Option<FilmFilter>) {
        match filter {
            Some(filter) => {
                self.filters.insert(kind, filter);
            }
            None => {
                self.filters.remove(&kind);
            }
        }
    }

    // Accessors

    pub fn title(&self) -> Option<&str> {
        match self.filters.get(&FilterKind::Title) {
            Some(FilmFilter::Title(title)) => Some(title.as_str()),
            _ => None,
        }
    }

    pub fn year(&self) -> Option<i32> {
        match self.filters.get(&FilterKind::Year) {
            Some(FilmFilter::Year(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn min_year(&self) -> Option<i32> {
        match self.filters.get(&FilterKind::MinYear) {
            Some(FilmFilter::MinYear(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn max_year(&self) -> Option<i32> {
        match self.filters.get(&FilterKind::MaxYear) {
            Some(FilmFilter::MaxYear(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn min_awards(&self) -> Option<i32> {
        match self.filters.get(&FilterKind::MinAwards) {
            Some(FilmFilter::MinAwards(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn max_awards(&self) -> Option<i32> {
        match self.filters.get(&FilterKind::MaxAwards) {
            Some(FilmFilter::MaxAwards(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn nominations(&self) -> Option<i32> {
        match self.filters.get(&FilterKind::Nominations) {
            Some(FilmFilter::Nominations(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn is_best_picture(&self) -> Option<bool> {
        match self.filters.get(&FilterKind::IsBestPicture) {
            Some(FilmFilter::IsBestPicture(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Iterates the active filters in [`FilterKind`] order
    pub fn filters(&self) -> impl Iterator<Item = &FilmFilter> {
        self.filters.values()
    }

    /// Number of active filters
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Returns true if a filter of `kind` is active
    pub fn has_filter(&self, kind: FilterKind) -> bool {
        self.filters.contains_key(&kind)
    }

    /// Checks a film against every active filter (AND semantics).
    ///
    /// A query without filters matches every film.
    pub fn matches(&self, film: &Film) -> bool {
        self.filters().all(|filter| filter.matches(film))
    }
}

fn non_negative(parameter: &'static str, value: Option<i32>) -> QueryResult<Option<i32>> {
    match value {
        Some(v) if v < 0 => Err(QueryError::NegativeBound { parameter }),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(title: &str, year: i32, awards: i32) -> Film {
        Film::new(title, year, awards, 3, false, 10)
    }

    #[test]
    fn test_new_query_is_empty() {
        let query = SearchQuery::new();
        assert_eq!(query.filter_count(), 0);
        assert_eq!(query.sort_by(), SortKey::Title);
        assert_eq!(query.limit(), None);
        assert!(query.matches(&film("Anything", 1900, 0)));
    }

    #[test]
    fn test_setting_installs_and_replaces() {
        let mut query = SearchQuery::new();
        query.set_title(Some("A".into()));
        query.set_title(Some("B".into()));

        assert_eq!(query.filter_count(), 1);
        assert_eq!(query.title(), Some("B"));
        assert!(query.matches(&film("B", 2000, 1)));
        assert!(!query.matches(&film("A", 2000, 1)));
    }

    #[test]
    fn test_clearing_removes_filter() {
        let mut query = SearchQuery::new();
        query.set_year(Some(2019));
        query.set_min_awards(Some(4)).unwrap();
        assert_eq!(query.filter_count(), 2);

        query.set_year(None);
        assert_eq!(query.filter_count(), 1);
        assert!(!query.has_filter(FilterKind::Year));
        assert_eq!(query.year(), None);
    }

    #[test]
    fn test_negative_bounds_rejected() {
        let mut query = SearchQuery::new();
        assert_eq!(
            query.set_min_awards(Some(-1)),
            Err(QueryError::NegativeBound { parameter: "minAwards" })
        );
        assert!(query.set_max_awards(Some(-1)).is_err());
        assert!(query.set_nominations(Some(-5)).is_err());
        assert!(query.set_limit(Some(-1)).is_err());
        assert_eq!(query.filter_count(), 0);
        assert_eq!(query.limit(), None);
    }

    #[test]
    fn test_zero_bounds_accepted() {
        let mut query = SearchQuery::new();
        assert!(query.set_min_awards(Some(0)).is_ok());
        assert!(query.set_limit(Some(0)).is_ok());
        assert_eq!(query.min_awards(), Some(0));
        assert_eq!(query.limit(), Some(0));
    }

    #[test]
    fn test_sort_and_limit_add_no_filters() {
        let mut query = SearchQuery::new();
        query.set_sort_by(SortKey::Awards);
        query.set_limit(Some(3)).unwrap();
        assert_eq!(query.filter_count(), 0);
    }

    #[test]
    fn test_active_filters_track_set_fields() {
        let mut query = SearchQuery::new();
        query.set_title(Some("T".into()));
        query.set_year(Some(1));
        query.set_min_year(Some(1));
        query.set_max_year(Some(1));
        query.set_min_awards(Some(1)).unwrap();
        query.set_max_awards(Some(1)).unwrap();
        query.set_nominations(Some(1)).unwrap();
        query.set_is_best_picture(Some(false));

        assert_eq!(query.filter_count(), FilterKind::ALL.len());
        for kind in FilterKind::ALL {
            assert!(query.has_filter(kind));
        }
    }

    #[test]
    fn test_additional_filter_only_narrows() {
        let films = vec![
            film("Parasite", 2019, 4),
            film("Ford v Ferrari", 2019, 2),
            film("Green Book", 2018, 3),
        ];

        let mut query = SearchQuery::new();
        query.set_year(Some(2019));
        let before: Vec<bool> = films.iter().map(|f| query.matches(f)).collect();

        query.set_min_awards(Some(3)).unwrap();
        let after: Vec<bool> = films.iter().map(|f| query.matches(f)).collect();

        for (b, a) in before.iter().zip(after.iter()) {
            assert!(!a || *b, "a film gained a match after adding a filter");
        }
        assert_eq!(after, vec![true, false, false]);
    }
}
