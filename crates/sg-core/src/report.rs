//! Client error reporting
//!
//! Reporters are constructed by the caller and handed to whatever needs
//! them; the site puts one in the Leptos context at the root component.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Where an error was observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorSource {
    /// Caught by an error boundary while rendering
    Render,
    /// An `<img>` failed to load and fell back to the placeholder
    Image,
    /// `window.onerror`
    Global,
    /// `unhandledrejection`
    UnhandledRejection,
}

impl fmt::Display for ErrorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSource::Render => write!(f, "render"),
            ErrorSource::Image => write!(f, "image"),
            ErrorSource::Global => write!(f, "global"),
            ErrorSource::UnhandledRejection => write!(f, "unhandled_rejection"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    pub id: Uuid,
    pub source: ErrorSource,
    pub message: String,
    /// Route or resource the error relates to
    pub location: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl ErrorReport {
    pub fn new(source: ErrorSource, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            source,
            message: message.into(),
            location: None,
            occurred_at: Utc::now(),
        }
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Sink for client errors. Implementations must not fail or panic.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, report: ErrorReport);
}

/// Writes reports to the `tracing` subscriber. Image fallbacks are routine
/// and logged at debug; everything else is a warning.
#[derive(Debug, Clone, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, report: ErrorReport) {
        let location = report.location.as_deref().unwrap_or("-");
        match report.source {
            ErrorSource::Image => tracing::debug!(
                id = %report.id,
                source = %report.source,
                location,
                "{}",
                report.message
            ),
            _ => tracing::warn!(
                id = %report.id,
                source = %report.source,
                location,
                "{}",
                report.message
            ),
        }
    }
}

/// Keeps every report in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    reports: Arc<Mutex<Vec<ErrorReport>>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<ErrorReport> {
        self.reports
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn count(&self, source: ErrorSource) -> usize {
        self.reports().iter().filter(|r| r.source == source).count()
    }
}

impl ErrorReporter for MemoryReporter {
    fn report(&self, report: ErrorReport) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push(report);
        }
    }
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for Arc<R> {
    fn report(&self, report: ErrorReport) {
        (**self).report(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_reporter_collects() {
        let reporter = MemoryReporter::new();
        reporter.report(ErrorReport::new(ErrorSource::Image, "missing /a.jpg").at("/portfolio"));
        reporter.report(ErrorReport::new(ErrorSource::Render, "boom"));

        let reports = reporter.reports();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].location.as_deref(), Some("/portfolio"));
        assert_eq!(reporter.count(ErrorSource::Image), 1);
        assert_eq!(reporter.count(ErrorSource::Global), 0);
    }

    #[test]
    fn test_reporter_behind_trait_object() {
        let memory = MemoryReporter::new();
        let shared: Arc<dyn ErrorReporter> = Arc::new(memory.clone());
        shared.report(ErrorReport::new(ErrorSource::UnhandledRejection, "rejected"));
        assert_eq!(memory.count(ErrorSource::UnhandledRejection), 1);
    }

    #[test]
    fn test_tracing_reporter_does_not_panic() {
        TracingReporter.report(ErrorReport::new(ErrorSource::Global, "script error"));
    }

    #[test]
    fn test_report_serializes_source_in_snake_case() {
        let json = serde_json::to_value(ErrorReport::new(ErrorSource::UnhandledRejection, "x")).unwrap();
        assert_eq!(json["source"], "unhandled_rejection");
    }
}
