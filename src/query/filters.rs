//! Film filters
//!
//! Each filter is a tagged variant owning its comparison value. Evaluation is
//! a match on the tag; filters hold no references and are `Send + Sync`.

use crate::film::Film;

use super::params::names;

/// The kinds of filter a query can hold, at most one of each
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterKind {
    Title,
    Year,
    MinYear,
    MaxYear,
    MinAwards,
    MaxAwards,
    Nominations,
    IsBestPicture,
}

impl FilterKind {
    /// All filter kinds in evaluation order
    pub const ALL: [FilterKind; 8] = [
        FilterKind::Title,
        FilterKind::Year,
        FilterKind::MinYear,
        FilterKind::MaxYear,
        FilterKind::MinAwards,
        FilterKind::MaxAwards,
        FilterKind::Nominations,
        FilterKind::IsBestPicture,
    ];

    /// Returns the request parameter that sets this filter
    pub fn param_name(&self) -> &'static str {
        match self {
            FilterKind::Title => names::TITLE,
            FilterKind::Year => names::YEAR,
            FilterKind::MinYear => names::MIN_YEAR,
            FilterKind::MaxYear => names::MAX_YEAR,
            FilterKind::MinAwards => names::MIN_AWARDS,
            FilterKind::MaxAwards => names::MAX_AWARDS,
            FilterKind::Nominations => names::NOMINATIONS,
            FilterKind::IsBestPicture => names::IS_BEST_PICTURE,
        }
    }
}

/// A single boolean test over a film
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilmFilter {
    /// Exact, case-sensitive title
    Title(String),
    /// Exact year
    Year(i32),
    /// year >= value
    MinYear(i32),
    /// year <= value
    MaxYear(i32),
    /// awards >= value
    MinAwards(i32),
    /// awards <= value
    MaxAwards(i32),
    /// Exact nominations
    Nominations(i32),
    /// Best picture flag equals value
    IsBestPicture(bool),
}

impl FilmFilter {
    /// Returns the kind of this filter
    pub fn kind(&self) -> FilterKind {
        match self {
            FilmFilter::Title(_) => FilterKind::Title,
            FilmFilter::Year(_) => FilterKind::Year,
            FilmFilter::MinYear(_) => FilterKind::MinYear,
            FilmFilter::MaxYear(_) => FilterKind::MaxYear,
            FilmFilter::MinAwards(_) => FilterKind::MinAwards,
            FilmFilter::MaxAwards(_) => FilterKind::MaxAwards,
            FilmFilter::Nominations(_) => FilterKind::Nominations,
            FilmFilter::IsBestPicture(_) => FilterKind::IsBestPicture,
        }
    }

    /// Checks a film against this filter
    pub fn matches(&self, film: &Film) -> bool {
        match self {
            // Untitled films never match a title
            FilmFilter::Title(title) => film.title() == Some(title.as_str()),
            FilmFilter::Year(year) => film.year == *year,
            FilmFilter::MinYear(min) => film.year >= *min,
            FilmFilter::MaxYear(max) => film.year <= *max,
            FilmFilter::MinAwards(min) => film.awards >= *min,
            FilmFilter::MaxAwards(max) => film.awards <= *max,
            FilmFilter::Nominations(n) => film.nominations == *n,
            FilmFilter::IsBestPicture(flag) => film.is_best_picture == *flag,
        }
    }
}
