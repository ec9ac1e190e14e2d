use tracing::error;

/// Operator-facing diagnostics channel for the logging middleware.
///
/// Injected at construction time rather than reached through a global, so the
/// test suite can observe emitted messages. The process-wide `tracing`
/// subscriber (configured from `logger_level`) decides whether a message
/// actually reaches stdout.
pub trait DiagnosticSink: Send + Sync {
    fn error(&self, message: &str);
}

/// Production sink: forwards messages at the `tracing` error level.
#[derive(Debug, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn error(&self, message: &str) {
        error!("{message}");
    }
}
