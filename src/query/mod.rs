//! Film query subsystem
//!
//! Turns raw request parameters into a [`SearchQuery`] and evaluates it
//! against an in-memory film collection.
//!
//! # Execution Flow (strict order)
//!
//! 1. Parse parameters into a `SearchQuery` (last value wins per name)
//! 2. Keep films matching every active filter (AND semantics)
//! 3. Stable sort by the selected key, ascending
//! 4. Truncate to the limit, if one was given
//! 5. Wrap the survivors in a [`SearchResult`]
//!
//! Everything here is pure and synchronous. Films and the query are only
//! read, never mutated, so one collection can serve concurrent queries.

mod engine;
mod errors;
mod filters;
mod params;
mod parser;
mod policy;
mod result;
mod search;
mod sort;

pub use engine::QueryEngine;
pub use errors::{QueryError, QueryErrorKind, QueryResult};
pub use filters::{FilmFilter, FilterKind};
pub use params::{names, ParameterMap};
pub use parser::{parse_boolean, parse_integer, QueryParser};
pub use policy::{SearchPolicy, StandardSearchPolicy};
pub use result::SearchResult;
pub use search::SearchQuery;
pub use sort::{comparator, sort_films, FilmComparator, SortKey};
