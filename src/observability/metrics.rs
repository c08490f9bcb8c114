//! Query metrics
//!
//! Counters only. Metrics are observational and never influence results.
//! All counters are monotonic and use relaxed ordering.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Registry of service counters
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    queries_executed: AtomicU64,
    queries_rejected: AtomicU64,
    films_returned: AtomicU64,
    sources_missing: AtomicU64,
}

impl MetricsRegistry {
    /// Creates a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful query that returned `films` records
    pub fn record_query(&self, films: usize) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
        self.films_returned
            .fetch_add(films as u64, Ordering::Relaxed);
    }

    /// Records a query rejected for invalid parameters
    pub fn record_rejected(&self) {
        self.queries_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a request whose container did not exist
    pub fn record_source_missing(&self) {
        self.sources_missing.fetch_add(1, Ordering::Relaxed);
    }

    pub fn queries_executed(&self) -> u64 {
        self.queries_executed.load(Ordering::Relaxed)
    }

    pub fn queries_rejected(&self) -> u64 {
        self.queries_rejected.load(Ordering::Relaxed)
    }

    pub fn films_returned(&self) -> u64 {
        self.films_returned.load(Ordering::Relaxed)
    }

    pub fn sources_missing(&self) -> u64 {
        self.sources_missing.load(Ordering::Relaxed)
    }

    /// Point-in-time copy of every counter
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            queries_executed: self.queries_executed(),
            queries_rejected: self.queries_rejected(),
            films_returned: self.films_returned(),
            sources_missing: self.sources_missing(),
        }
    }
}

/// Serializable snapshot of [`MetricsRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub queries_executed: u64,
    pub queries_rejected: u64,
    pub films_returned: u64,
    pub sources_missing: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_is_zeroed() {
        let metrics = MetricsRegistry::new();
        assert_eq!(
            metrics.snapshot(),
            MetricsSnapshot {
                queries_executed: 0,
                queries_rejected: 0,
                films_returned: 0,
                sources_missing: 0,
            }
        );
    }

    #[test]
    fn test_record_query_counts_films() {
        let metrics = MetricsRegistry::new();
        metrics.record_query(3);
        metrics.record_query(0);

        assert_eq!(metrics.queries_executed(), 2);
        assert_eq!(metrics.films_returned(), 3);
    }

    #[test]
    fn test_rejected_and_missing_are_independent() {
        let metrics = MetricsRegistry::new();
        metrics.record_rejected();
        metrics.record_source_missing();
        metrics.record_source_missing();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.queries_rejected, 1);
        assert_eq!(snapshot.sources_missing, 2);
        assert_eq!(snapshot.queries_executed, 0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let metrics = MetricsRegistry::new();
        metrics.record_query(2);
        let json = serde_json::to_value(metrics.snapshot()).unwrap();
        assert_eq!(json["queries_executed"], 1);
        assert_eq!(json["films_returned"], 2);
    }
}
