//! Observable events
//!
//! Events are explicit and typed; their string names are stable.

use std::fmt;

use super::logger::Severity;

/// Observable events of the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Resource tree read into memory
    CatalogLoaded,
    /// HTTP listener bound
    ServerListening,
    /// Process is exiting
    ShutdownComplete,

    // Query
    /// Parameters parsed into a query
    QueryParsed,
    /// Query executed and result produced
    QueryExecuted,
    /// Query rejected as invalid input
    QueryRejected,

    // Source
    /// Requested container does not exist
    SourceMissing,
    /// A container node could not be mapped to films
    SourceMappingFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "OSCARQUERY_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CatalogLoaded => "CATALOG_LOADED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::QueryParsed => "QUERY_PARSED",
            Event::QueryExecuted => "QUERY_COMPLETE",
            Event::QueryRejected => "QUERY_REJECTED",

            Event::SourceMissing => "SOURCE_MISSING",
            Event::SourceMappingFailed => "SOURCE_MAPPING_FAILED",
        }
    }

    /// Returns the severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::QueryParsed => Severity::Trace,
            Event::QueryRejected | Event::SourceMissing => Severity::Warn,
            Event::SourceMappingFailed => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
