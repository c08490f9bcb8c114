//! Request parameter parser
//!
//! Converts a [`ParameterMap`] into a [`SearchQuery`]. Only recognized names
//! are type-checked; anything else is ignored. The first invalid parameter
//! aborts parsing.

use super::errors::{QueryError, QueryResult};
use super::params::{names, ParameterMap};
use super::search::SearchQuery;
use super::sort::SortKey;

/// Builds queries from request parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParser;

impl QueryParser {
    /// Parses a full parameter map.
    ///
    /// When a name was submitted several times, only its last value is used.
    pub fn parse(params: &ParameterMap) -> QueryResult<SearchQuery> {
        let mut query = SearchQuery::new();

        for (name, values) in params.iter() {
            let value = values.last().map(String::as_str);
            Self::apply(&mut query, name, value)?;
        }

        Ok(query)
    }

    /// Applies a single parameter to `query`.
    ///
    /// A `None` value clears the corresponding field (and resets the sort key
    /// to title order for `sortBy`).
    pub fn apply(query: &mut SearchQuery, name: &str, value: Option<&str>) -> QueryResult<()> {
        // Checked before name matching so malformed input fails fast
        if name.trim().is_empty() {
            return Err(QueryError::BlankParameterName);
        }

        match name {
            names::TITLE => query.set_title(value.map(str::to_owned)),
            names::YEAR => query.set_year(parse_integer(value, name)?),
            names::MIN_YEAR => query.set_min_year(parse_integer(value, name)?),
            names::MAX_YEAR => query.set_max_year(parse_integer(value, name)?),
            names::MIN_AWARDS => query.set_min_awards(parse_integer(value, name)?)?,
            names::MAX_AWARDS => query.set_max_awards(parse_integer(value, name)?)?,
            names::NOMINATIONS => query.set_nominations(parse_integer(value, name)?)?,
            names::IS_BEST_PICTURE => query.set_is_best_picture(value.map(parse_boolean)),
            names::SORT_BY => {
                let sort_by = match value {
                    Some(raw) => raw.parse::<SortKey>()?,
                    None => SortKey::Title,
                };
                query.set_sort_by(sort_by);
            }
            names::LIMIT => query.set_limit(parse_integer(value, name)?)?,
            _ => {}
        }

        Ok(())
    }
}

/// Parses a base-10 32-bit integer; `None` stays `None`.
///
/// Accepts an optional `+`/`-` sign followed by ASCII digits only. Other
/// Unicode decimal digits (fullwidth `２０１９`, Arabic-Indic, ...) are
/// rejected as not an integer.
pub fn parse_integer(value: Option<&str>, parameter: &str) -> QueryResult<Option<i32>> {
    match value {
        Some(raw) => raw
            .parse::<i32>()
            .map(Some)
            .map_err(|_| QueryError::NotAnInteger {
                parameter: parameter.to_string(),
                value: raw.to_string(),
            }),
        None => Ok(None),
    }
}

/// Case-insensitive `"true"` is true, everything else is false
pub fn parse_boolean(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}
