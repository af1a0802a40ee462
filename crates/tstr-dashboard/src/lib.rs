//! tstr-dashboard: polling front end for the tstr CI dashboard
//!
//! Pulls the heads, work-queue and benchmark feeds from the backend on
//! independent refresh cycles and keeps the latest display-ready snapshot of
//! each in a shared [`state::DashboardState`].
//!
//! # Main Entry Points
//!
//! - [`refresh`] - Self-rescheduling poll loop with failure containment
//! - [`api`] - Backend HTTP client and the [`api::Fetch`] capability
//! - [`state`] - View state and the [`state::Dashboard`] that feeds it

pub mod api;
pub mod errors;
pub mod refresh;
pub mod state;

pub use api::{ApiClient, Fetch, JsonSource};
pub use errors::FetchError;
pub use refresh::{DiagnosticSink, PollHandle, PollPhase, RefreshOptions, RefreshScheduler};
pub use state::{Dashboard, DashboardState, Feed, FeedStatus, SharedState};
