//! Observability for the film query service
//!
//! - Structured JSON-line logging
//! - Typed lifecycle and query events
//! - Counter metrics
//!
//! Observability is read-only: nothing here changes query results. The query
//! core never logs; callers at the edges (HTTP handlers, CLI commands) do.
//!
//! # Usage
//!
//! ```ignore
//! use oscarquery::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::QueryExecuted, &[("returned", "3")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.record_query(3);
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::{ObservationScope, Timer};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields, at the event's own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
