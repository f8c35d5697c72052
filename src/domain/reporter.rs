//! Diagnostic reporting for filter construction failures.

use tracing::error;

/// Receives human-readable diagnostics when a filter cannot be built.
pub trait DiagnosticReporter: Send + Sync {
    /// Report a construction error.
    fn error(&self, message: &str);
}

/// Reporter that forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl DiagnosticReporter for TracingReporter {
    fn error(&self, message: &str) {
        error!("{}", message);
    }
}
