use tracing::error;

use tstr_core::errors::TstrError;

use crate::errors::FetchError;

/// Out-of-band channel for failed polls.
///
/// Failures never reach the consumer of a refresh cycle; they are reported
/// here instead.
pub trait DiagnosticSink: Send + Sync + 'static {
    fn report_failure(&self, source: &str, error: &FetchError);
}

/// Reports failed polls to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report_failure(&self, source: &str, error: &FetchError) {
        error!(
            event = "dashboard.refresh.fetch_failed",
            source = source,
            error = %error,
            error_code = error.error_code(),
        );
    }
}
