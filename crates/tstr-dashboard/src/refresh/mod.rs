//! Background refresh for dashboard feeds.
//!
//! Each feed runs one [`RefreshScheduler`] cycle: fetch, publish on success
//! or report on failure, wait, repeat. A failed poll leaves the previous
//! snapshot in place and never ends the cycle.

pub mod scheduler;
pub mod sink;

pub use scheduler::{PollHandle, PollPhase, RefreshOptions, RefreshScheduler};
pub use sink::{DiagnosticSink, TracingSink};
