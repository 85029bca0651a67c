//! Injectable diagnostics seam.
//!
//! The engine never talks to a logging framework directly. Every
//! diagnostic goes through the [`Reporter`] trait, injected at
//! construction, so the host application decides where messages end up.
//! The default is [`TracingReporter`], which forwards to the `tracing`
//! ecosystem at the matching level.

use parking_lot::Mutex;
use std::fmt;

/// Severity of a diagnostic message.
///
/// The engine uses a fixed mapping: successful transitions report at
/// `Debug`, configuration dumps at `Info`, inputs with no applicable
/// transition at `Warn`, and inputs outside the declared alphabet at
/// `Error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sink for engine diagnostics.
pub trait Reporter: Send + Sync {
    fn report(&self, severity: Severity, message: &str);
}

/// Forwards diagnostics to `tracing` at the matching level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => tracing::debug!("{}", message),
            Severity::Info => tracing::info!("{}", message),
            Severity::Warn => tracing::warn!("{}", message),
            Severity::Error => tracing::error!("{}", message),
        }
    }
}

/// Discards all diagnostics.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _severity: Severity, _message: &str) {}
}

/// Captures diagnostics in memory for later inspection.
///
/// Intended for tests that assert on the severity of rejections.
///
/// # Example
///
/// ```rust
/// use turnstile::report::{MemoryReporter, Reporter, Severity};
///
/// let reporter = MemoryReporter::new();
/// reporter.report(Severity::Warn, "no transition");
///
/// let events = reporter.events();
/// assert_eq!(events, vec![(Severity::Warn, "no transition".to_string())]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<(Severity, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured events in report order.
    pub fn events(&self) -> Vec<(Severity, String)> {
        self.events.lock().clone()
    }

    /// Drop all captured events.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, severity: Severity, message: &str) {
        self.events.lock().push((severity, message.to_string()));
    }
}
