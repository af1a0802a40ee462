//! tstr-core: Core library for the tstr CI dashboard
//!
//! This library turns the backend's flat, wire-shaped records into the
//! display-ready structures the dashboard views render. Everything here is
//! pure data transformation; polling and HTTP live in `tstr-dashboard`.
//!
//! # Main Entry Points
//!
//! - [`heads`] - Branch and pull request records, status entry derivation
//! - [`bench`] - Benchmark results and test-type aggregation
//! - [`workqueue`] - CI work-queue items (pass-through)
//! - [`format`] - Value formatting for display
//! - [`config`] - Configuration management

pub mod bench;
pub mod config;
pub mod errors;
pub mod events;
pub mod format;
pub mod heads;
pub mod logging;
pub mod timestamp;
pub mod workqueue;

// Re-export commonly used types at crate root for convenience
pub use bench::{BenchAggregate, BenchOpResult, BenchResult, TestResult, TestType, TestTypeKey};
pub use config::DashboardConfig;
pub use errors::{ConfigError, TstrError};
pub use format::humanize_bytes;
pub use heads::{BranchRecord, CommitRecord, CommitStatus, EntryKind, EntryState, StatusEntry};
pub use workqueue::{JobKind, JobState, WorkQueueItem, WorkQueueJob, WorkQueueState};

// Re-export the pure transformations as the primary API
pub use bench::aggregate::aggregate;
pub use heads::derive::derive_status_entries;

// Re-export logging initialization
pub use logging::init_logging;
