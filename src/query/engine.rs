//! Query engine
//!
//! Execution order:
//! 1. Keep films passing every active filter
//! 2. Stable sort by the query's sort key
//! 3. Truncate to the limit, if any
//! 4. Return the survivors
//!
//! Input films are never mutated; matches are cloned into the result.

use crate::film::Film;

use super::policy::{SearchPolicy, StandardSearchPolicy};
use super::result::SearchResult;
use super::search::SearchQuery;

/// Evaluates queries against a film collection
#[derive(Debug, Clone, Default)]
pub struct QueryEngine<P: SearchPolicy = StandardSearchPolicy> {
    policy: P,
}

impl QueryEngine<StandardSearchPolicy> {
    /// Creates an engine with the standard policy
    pub fn new() -> Self {
        Self::with_policy(StandardSearchPolicy)
    }
}

impl<P: SearchPolicy> QueryEngine<P> {
    /// Creates an engine with a custom policy
    pub fn with_policy(policy: P) -> Self {
        Self { policy }
    }

    /// Executes `query` over `films`.
    ///
    /// Deterministic: same films in the same order + same query = same result.
    pub fn execute(&self, films: &[Film], query: &SearchQuery) -> SearchResult {
        // Step 1: filter
        let mut matched: Vec<Film> = films
            .iter()
            .filter(|film| self.policy.matches(film, query))
            .cloned()
            .collect();
        let matched_count = matched.len();

        // Step 2: stable sort
        matched.sort_by(self.policy.comparator(query.sort_by()));

        // Step 3: limit
        let mut limit_applied = false;
        if let Some(limit) = query.limit() {
            let limit = usize::try_from(limit).unwrap_or(usize::MAX);
            limit_applied = matched.len() > limit;
            matched.truncate(limit);
        }

        SearchResult {
            result: matched,
            scanned_count: films.len(),
            matched_count,
            limit_applied,
        }
    }
}
