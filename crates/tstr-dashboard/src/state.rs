//! Dashboard view state.
//!
//! Holds the latest display-ready snapshot of every feed. Each successful
//! poll derives its structure outside the lock and swaps it in with a single
//! write, so readers never observe a half-applied update. Failed polls leave
//! the previous snapshot in place and only mark the feed as stale.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use tstr_core::config::PollingConfig;
use tstr_core::{
    BenchAggregate, BenchResult, BranchRecord, StatusEntry, WorkQueueItem, aggregate,
    derive_status_entries,
};

use crate::api::{ApiClient, Fetch, bench_results_source, heads_source, workqueue_source};
use crate::errors::FetchError;
use crate::refresh::{DiagnosticSink, PollHandle, RefreshScheduler, TracingSink};

/// The backend feeds the dashboard polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feed {
    Heads,
    WorkQueue,
    BenchResults,
}

impl Feed {
    pub const ALL: [Feed; 3] = [Feed::Heads, Feed::WorkQueue, Feed::BenchResults];

    pub fn name(self) -> &'static str {
        match self {
            Feed::Heads => "heads",
            Feed::WorkQueue => "workqueue",
            Feed::BenchResults => "bench_results",
        }
    }

    pub fn from_name(name: &str) -> Option<Feed> {
        Feed::ALL.into_iter().find(|feed| feed.name() == name)
    }
}

/// Freshness bookkeeping for one feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedStatus {
    pub last_success: Option<DateTime<Utc>>,
    pub last_failure: Option<DateTime<Utc>>,
    /// Failed polls since the last successful one.
    pub consecutive_failures: u32,
}

impl FeedStatus {
    /// Data is stale once a poll has failed since the last success.
    pub fn is_stale(&self) -> bool {
        self.consecutive_failures > 0
    }

    fn record_success(&mut self, at: DateTime<Utc>) {
        self.last_success = Some(at);
        self.consecutive_failures = 0;
    }

    fn record_failure(&mut self, at: DateTime<Utc>) {
        self.last_failure = Some(at);
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
    }
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    entries: Vec<StatusEntry>,
    wq_items: Vec<WorkQueueItem>,
    bench: BenchAggregate,
    heads_status: FeedStatus,
    workqueue_status: FeedStatus,
    bench_status: FeedStatus,
}

impl DashboardState {
    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }

    pub fn wq_items(&self) -> &[WorkQueueItem] {
        &self.wq_items
    }

    pub fn bench(&self) -> &BenchAggregate {
        &self.bench
    }

    pub fn feed_status(&self, feed: Feed) -> &FeedStatus {
        match feed {
            Feed::Heads => &self.heads_status,
            Feed::WorkQueue => &self.workqueue_status,
            Feed::BenchResults => &self.bench_status,
        }
    }

    fn feed_status_mut(&mut self, feed: Feed) -> &mut FeedStatus {
        match feed {
            Feed::Heads => &mut self.heads_status,
            Feed::WorkQueue => &mut self.workqueue_status,
            Feed::BenchResults => &mut self.bench_status,
        }
    }
}

/// View state shared between the refresh cycles and the renderer.
#[derive(Debug, Clone, Default)]
pub struct SharedState {
    inner: Arc<RwLock<DashboardState>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    // A consumer that panicked mid-write cannot leave a partial snapshot
    // behind: every write is a whole-field replacement.
    fn read(&self) -> RwLockReadGuard<'_, DashboardState> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, DashboardState> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Copy of the current state for rendering.
    pub fn snapshot(&self) -> DashboardState {
        self.read().clone()
    }

    pub fn apply_heads(&self, records: &[BranchRecord]) {
        let entries = derive_status_entries(records);
        let count = entries.len();

        let mut state = self.write();
        state.entries = entries;
        state.heads_status.record_success(Utc::now());
        drop(state);

        debug!(event = "dashboard.state.heads_replaced", count = count);
    }

    pub fn apply_workqueue(&self, items: Vec<WorkQueueItem>) {
        let count = items.len();

        let mut state = self.write();
        state.wq_items = items;
        state.workqueue_status.record_success(Utc::now());
        drop(state);

        debug!(event = "dashboard.state.workqueue_replaced", count = count);
    }

    pub fn apply_bench_results(&self, results: Vec<BenchResult>) {
        let bench = aggregate(results);
        let count = bench.all_results.len();
        let test_types = bench.test_types().len();

        let mut state = self.write();
        state.bench = bench;
        state.bench_status.record_success(Utc::now());
        drop(state);

        debug!(
            event = "dashboard.state.bench_replaced",
            count = count,
            test_types = test_types,
        );
    }

    pub fn record_failure(&self, feed: Feed) {
        self.write().feed_status_mut(feed).record_failure(Utc::now());
    }
}

/// Logs failed polls and marks the affected feed stale.
pub struct StateSink {
    state: SharedState,
    log: TracingSink,
}

impl StateSink {
    pub fn new(state: SharedState) -> Self {
        Self {
            state,
            log: TracingSink,
        }
    }
}

impl DiagnosticSink for StateSink {
    fn report_failure(&self, source: &str, error: &FetchError) {
        self.log.report_failure(source, error);
        if let Some(feed) = Feed::from_name(source) {
            self.state.record_failure(feed);
        }
    }
}

/// Owns the three feed cycles and the state they publish into.
pub struct Dashboard {
    state: SharedState,
    shutdown: CancellationToken,
    handles: Vec<PollHandle>,
}

impl Dashboard {
    /// Start polling every feed from the backend behind `client`.
    pub fn start(client: &ApiClient, polling: &PollingConfig) -> Self {
        Self::start_with(
            heads_source(client),
            workqueue_source(client),
            bench_results_source(client),
            polling,
        )
    }

    /// Start polling with explicit sources.
    pub fn start_with<H, W, B>(heads: H, workqueue: W, bench: B, polling: &PollingConfig) -> Self
    where
        H: Fetch<BranchRecord>,
        W: Fetch<WorkQueueItem>,
        B: Fetch<BenchResult>,
    {
        let state = SharedState::new();
        let shutdown = CancellationToken::new();
        let sink: Arc<dyn DiagnosticSink> = Arc::new(StateSink::new(state.clone()));

        let heads_state = state.clone();
        let heads_handle =
            RefreshScheduler::new(Feed::Heads.name(), heads, polling.heads_interval())
                .with_sink(Arc::clone(&sink))
                .start_with_shutdown(
                    move |records: Vec<BranchRecord>| heads_state.apply_heads(&records),
                    &shutdown,
                );

        let wq_state = state.clone();
        let wq_handle =
            RefreshScheduler::new(Feed::WorkQueue.name(), workqueue, polling.workqueue_interval())
                .with_sink(Arc::clone(&sink))
                .start_with_shutdown(
                    move |items: Vec<WorkQueueItem>| wq_state.apply_workqueue(items),
                    &shutdown,
                );

        let bench_state = state.clone();
        let bench_handle =
            RefreshScheduler::new(Feed::BenchResults.name(), bench, polling.bench_interval())
                .with_sink(sink)
                .start_with_shutdown(
                    move |results: Vec<BenchResult>| bench_state.apply_bench_results(results),
                    &shutdown,
                );

        info!(event = "dashboard.started", feeds = Feed::ALL.len());

        Self {
            state,
            shutdown,
            handles: vec![heads_handle, wq_handle, bench_handle],
        }
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state.snapshot()
    }

    pub fn handles(&self) -> &[PollHandle] {
        &self.handles
    }

    /// Stop every feed. No state update happens after this returns.
    pub async fn stop(mut self) {
        info!(event = "dashboard.stop_started");
        self.shutdown.cancel();
        for handle in &mut self.handles {
            handle.stop().await;
        }
        info!(event = "dashboard.stop_completed");
    }
}
