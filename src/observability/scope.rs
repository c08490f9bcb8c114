//! Observation scopes
//!
//! A scope logs `<NAME>_BEGIN` on creation and exactly one of
//! `<NAME>_COMPLETE`, `<NAME>_ERROR` or `<NAME>_INCOMPLETE` when it ends.
//! `_INCOMPLETE` is emitted from `Drop` when neither `complete` nor `fail`
//! was called.

use std::time::{Duration, Instant};

use super::logger::{Logger, Severity};

/// Logs the begin and end of an operation with its duration
pub struct ObservationScope {
    operation: &'static str,
    start: Instant,
    fields: Vec<(String, String)>,
    finished: bool,
}

impl ObservationScope {
    /// Begins a scope for `operation`
    pub fn new(operation: &'static str) -> Self {
        Self::with_fields(operation, &[])
    }

    /// Begins a scope carrying fields that are repeated on every line
    pub fn with_fields(operation: &'static str, fields: &[(&str, &str)]) -> Self {
        let scope = Self {
            operation,
            start: Instant::now(),
            fields: fields
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            finished: false,
        };
        scope.emit(Severity::Info, "BEGIN", &[]);
        scope
    }

    /// Ends the scope successfully
    pub fn complete(self) {
        self.complete_with_fields(&[]);
    }

    /// Ends the scope successfully with extra fields
    pub fn complete_with_fields(mut self, extra: &[(&str, &str)]) {
        self.finished = true;
        self.emit(Severity::Info, "COMPLETE", extra);
    }

    /// Ends the scope with an error
    pub fn fail(mut self, reason: &str) {
        self.finished = true;
        self.emit(Severity::Error, "ERROR", &[("reason", reason)]);
    }

    fn emit(&self, severity: Severity, suffix: &str, extra: &[(&str, &str)]) {
        let event = format!("{}_{}", self.operation, suffix);
        let duration = self.start.elapsed().as_millis().to_string();

        let mut fields: Vec<(&str, &str)> = self
            .fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        fields.extend_from_slice(extra);
        if suffix != "BEGIN" {
            fields.push(("duration_ms", duration.as_str()));
        }

        Logger::log(severity, &event, &fields);
    }
}

impl Drop for ObservationScope {
    fn drop(&mut self) {
        if !self.finished {
            self.emit(Severity::Warn, "INCOMPLETE", &[]);
        }
    }
}

/// Simple stopwatch for request timing
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.start.elapsed().as_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_complete() {
        let scope = ObservationScope::with_fields("CATALOG_LOAD", &[("path", "a.json")]);
        assert!(!scope.finished);
        scope.complete_with_fields(&[("nodes", "4")]);
    }

    #[test]
    fn test_scope_fail() {
        let scope = ObservationScope::new("CATALOG_LOAD");
        scope.fail("file not found");
    }

    #[test]
    fn test_scope_drop_without_completion() {
        let scope = ObservationScope::new("CATALOG_LOAD");
        drop(scope);
    }

    #[test]
    fn test_timer_is_monotonic() {
        let timer = Timer::start();
        let first = timer.elapsed();
        let second = timer.elapsed();
        assert!(second >= first);
    }
}
