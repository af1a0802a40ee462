//! CI work-queue items as listed by `GET /api/workqueue`.
//!
//! The dashboard publishes these unchanged; there is no derivation step.

pub mod types;

pub use types::{JobKind, JobState, WorkQueueItem, WorkQueueJob, WorkQueueState};
