//! Self-rescheduling poll loop.
//!
//! A cycle moves through `Idle -> Fetching -> Waiting -> Fetching -> ...`
//! and back to `Idle` once cancelled. The delay is measured from the moment
//! a fetch settles, so a slow backend never sees overlapping requests.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::api::Fetch;
use crate::refresh::sink::{DiagnosticSink, TracingSink};

/// Where a refresh cycle currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollPhase {
    Idle,
    Fetching,
    Waiting,
}

/// Tuning for one refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshOptions {
    /// Time to wait after an iteration settles before the next fetch.
    pub interval: Duration,
}

impl RefreshOptions {
    pub fn from_millis(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
        }
    }
}

impl From<Duration> for RefreshOptions {
    fn from(interval: Duration) -> Self {
        Self { interval }
    }
}

/// Polls one data source on a fixed post-settle delay.
///
/// The scheduler itself holds no running state; every [`start`] spawns an
/// independent cycle and returns the [`PollHandle`] that controls it. Call
/// `start` once per logical subscription.
///
/// [`start`]: RefreshScheduler::start
pub struct RefreshScheduler<T, F> {
    name: String,
    fetcher: Arc<F>,
    options: RefreshOptions,
    sink: Arc<dyn DiagnosticSink>,
    _marker: PhantomData<fn() -> T>,
}

impl<T, F> RefreshScheduler<T, F>
where
    T: Send + 'static,
    F: Fetch<T>,
{
    /// Create a scheduler for `fetcher`. `name` identifies the feed in logs
    /// and failure reports.
    pub fn new(name: impl Into<String>, fetcher: F, options: impl Into<RefreshOptions>) -> Self {
        Self {
            name: name.into(),
            fetcher: Arc::new(fetcher),
            options: options.into(),
            sink: Arc::new(TracingSink),
            _marker: PhantomData,
        }
    }

    /// Route failure reports to `sink` instead of the log.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> RefreshOptions {
        self.options
    }

    /// Start a cycle that hands every successful snapshot to `consumer`.
    ///
    /// The first fetch starts immediately. Must be called from within a
    /// tokio runtime.
    pub fn start<C>(&self, consumer: C) -> PollHandle
    where
        C: FnMut(Vec<T>) + Send + 'static,
    {
        self.start_with_shutdown(consumer, &CancellationToken::new())
    }

    /// Like [`start`](Self::start), but the cycle also ends when `shutdown`
    /// is cancelled.
    pub fn start_with_shutdown<C>(&self, consumer: C, shutdown: &CancellationToken) -> PollHandle
    where
        C: FnMut(Vec<T>) + Send + 'static,
    {
        let token = shutdown.child_token();
        let (phase_tx, phase_rx) = watch::channel(PollPhase::Idle);

        let task = tokio::spawn(run_cycle(
            self.name.clone(),
            Arc::clone(&self.fetcher),
            self.options.interval,
            Arc::clone(&self.sink),
            consumer,
            token.clone(),
            phase_tx,
        ));

        PollHandle {
            name: self.name.clone(),
            token,
            task: Some(task),
            phase: phase_rx,
        }
    }
}

async fn run_cycle<T, F, C>(
    name: String,
    fetcher: Arc<F>,
    interval: Duration,
    sink: Arc<dyn DiagnosticSink>,
    mut consumer: C,
    token: CancellationToken,
    phase: watch::Sender<PollPhase>,
) where
    F: Fetch<T>,
    C: FnMut(Vec<T>),
{
    info!(
        event = "dashboard.refresh.started",
        source = %name,
        interval_ms = interval.as_millis() as u64,
    );

    let mut iteration: u64 = 0;
    loop {
        iteration += 1;
        phase.send_replace(PollPhase::Fetching);

        let outcome = tokio::select! {
            biased;
            _ = token.cancelled() => break,
            outcome = fetcher.fetch() => outcome,
        };

        match outcome {
            Ok(items) => {
                // A fetch can settle in the same instant stop() is called.
                if token.is_cancelled() {
                    break;
                }
                debug!(
                    event = "dashboard.refresh.delivered",
                    source = %name,
                    iteration = iteration,
                    count = items.len(),
                );
                consumer(items);
            }
            Err(e) => sink.report_failure(&name, &e),
        }

        phase.send_replace(PollPhase::Waiting);

        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }

    phase.send_replace(PollPhase::Idle);

    info!(
        event = "dashboard.refresh.stopped",
        source = %name,
        iterations = iteration,
    );
}

/// Controls one running refresh cycle.
///
/// Dropping the handle cancels the cycle without waiting for it; use
/// [`stop`](Self::stop) when no consumer call may happen afterwards.
pub struct PollHandle {
    name: String,
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
    phase: watch::Receiver<PollPhase>,
}

impl PollHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phase(&self) -> PollPhase {
        *self.phase.borrow()
    }

    /// Receiver that observes every phase transition.
    pub fn watch_phase(&self) -> watch::Receiver<PollPhase> {
        self.phase.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Cancel the cycle and wait for it to wind down.
    ///
    /// Cancels both the pending timer and any in-flight fetch, including one
    /// that already resolved but has not been delivered. Once this returns
    /// the consumer will not be called again. Calling it again is a no-op.
    pub async fn stop(&mut self) {
        self.token.cancel();

        let Some(task) = self.task.take() else {
            return;
        };

        if let Err(e) = task.await {
            error!(
                event = "dashboard.refresh.task_failed",
                source = %self.name,
                error = %e,
            );
        }

        debug!(event = "dashboard.refresh.stop_completed", source = %self.name);
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
