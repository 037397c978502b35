//! Error reporting for recovered failures.
//!
//! The configuration reader swallows malformed documents and missing keys by
//! design, so the only trace of those failures is whatever gets reported
//! here. Callers inject a [`Telemetry`] implementation; the library never
//! picks a sink on its own.

use std::error::Error;
use std::sync::{Arc, Mutex};

/// Sink for errors that were recovered from with a default value.
pub trait Telemetry: Send + Sync {
    /// Records a recovered error.
    ///
    /// Implementations must not panic; reporting is best-effort.
    fn record_error(&self, error: &dyn Error);
}

/// Telemetry that forwards to the `log` facade.
///
/// This is the default sink. Deployments with a crash reporter swap in their
/// own [`Telemetry`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTelemetry;

impl Telemetry for LogTelemetry {
    fn record_error(&self, error: &dyn Error) {
        log::error!("❌ Recovered error: {}", render_chain(error));
    }
}

/// Telemetry that collects reports in memory.
///
/// Used by tests and by the bundle checker, which prints the collected
/// reports at the end of a run. Reports carry a timestamp and are returned
/// newest first.
#[derive(Clone, Default)]
pub struct MemoryTelemetry {
    reports: Arc<Mutex<Vec<String>>>,
}

impl MemoryTelemetry {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all reports, newest first.
    pub fn reports(&self) -> Vec<String> {
        if let Ok(reports) = self.reports.lock() {
            let mut result = reports.clone();
            result.reverse();
            result
        } else {
            Vec::new()
        }
    }

    /// Number of reports collected so far.
    pub fn len(&self) -> usize {
        if let Ok(reports) = self.reports.lock() {
            reports.len()
        } else {
            0
        }
    }

    /// Whether nothing has been reported yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all collected reports.
    pub fn clear(&self) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.clear();
        }
    }
}

impl Telemetry for MemoryTelemetry {
    fn record_error(&self, error: &dyn Error) {
        if let Ok(mut reports) = self.reports.lock() {
            let timestamp = chrono::Local::now().format("[%H:%M:%S%.3f]");
            reports.push(format!("{timestamp} {}", render_chain(error)));
        }
    }
}

/// Renders an error and its sources as a single `caused by` chain.
fn render_chain(error: &dyn Error) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(&format!(", caused by: {cause}"));
        source = cause.source();
    }
    rendered
}
