//! End-to-end behaviour of the three feed cycles publishing into shared state.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use chrono::{TimeZone, Utc};

use tstr_core::config::PollingConfig;
use tstr_core::{BenchOpResult, BenchResult, BranchRecord, CommitRecord, WorkQueueItem};
use tstr_dashboard::{Dashboard, Feed, FetchError, PollPhase};

fn polling() -> PollingConfig {
    PollingConfig {
        heads_interval_ms: Some(30_000),
        bench_interval_ms: Some(30_000),
        workqueue_interval_ms: Some(10_000),
    }
}

fn branch(source: &str) -> BranchRecord {
    BranchRecord {
        name: source.to_string(),
        source: source.to_string(),
        is_pull_request: false,
        pull_request_id: None,
        commits: vec![CommitRecord {
            sha: "abc".to_string(),
            when: Utc.with_ymd_and_hms(2022, 5, 4, 12, 0, 0).unwrap(),
        }],
        raw_state: "open".to_string(),
    }
}

fn bench_run(id: u64, workload: &str) -> BenchResult {
    BenchResult {
        id,
        version: "v0.1.0".to_string(),
        date: Utc.with_ymd_and_hms(2022, 6, 1, 8, 0, 0).unwrap(),
        duration_seconds: 60.0,
        duration_label: "60s".to_string(),
        thread_count: 4,
        workload: workload.to_string(),
        object_size: "4K".to_string(),
        object_count: 100,
        ops: vec![BenchOpResult {
            name: "PUT".to_string(),
            percent_of_baseline: 100.0,
            ops_per_sec: 10.0,
            objs_per_sec: 10.0,
            bytes_per_sec: 40960.0,
        }],
    }
}

fn unavailable() -> FetchError {
    FetchError::Status {
        url: "http://localhost:8080/api/heads/".to_string(),
        status: 503,
    }
}

#[tokio::test(start_paused = true)]
async fn test_feeds_publish_independently() {
    let heads_calls = Arc::new(AtomicUsize::new(0));
    let heads = {
        let heads_calls = Arc::clone(&heads_calls);
        move || {
            let n = heads_calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 0 {
                    Err(unavailable())
                } else {
                    Ok(vec![branch("main"), branch("wip")])
                }
            }
        }
    };
    let workqueue = || async { Ok::<_, FetchError>(Vec::<WorkQueueItem>::new()) };
    let bench = || async {
        Ok::<_, FetchError>(vec![
            bench_run(1, "mixed"),
            bench_run(2, "mixed"),
            bench_run(3, "read"),
        ])
    };

    let dashboard = Dashboard::start_with(heads, workqueue, bench, &polling());
    assert_eq!(dashboard.handles().len(), 3);

    tokio::time::sleep(Duration::from_secs(1)).await;

    // Heads failed on its first poll, the others went through
    let snapshot = dashboard.snapshot();
    assert!(snapshot.entries().is_empty());
    let heads_status = snapshot.feed_status(Feed::Heads);
    assert!(heads_status.is_stale());
    assert!(heads_status.last_success.is_none());
    assert_eq!(snapshot.bench().test_types().len(), 2);
    assert_eq!(snapshot.bench().all_results.len(), 3);
    assert!(snapshot.feed_status(Feed::WorkQueue).last_success.is_some());

    tokio::time::sleep(Duration::from_secs(30)).await;

    let snapshot = dashboard.snapshot();
    assert_eq!(snapshot.entries().len(), 2);
    assert_eq!(snapshot.entries()[1].display_name, "wip");
    assert!(!snapshot.feed_status(Feed::Heads).is_stale());
    assert_eq!(heads_calls.load(Ordering::SeqCst), 2);

    dashboard.stop().await;
}

#[tokio::test(start_paused = true)]
async fn test_stop_ends_every_cycle() {
    let heads = || async { Ok::<_, FetchError>(vec![branch("main")]) };
    let workqueue = || async { Ok::<_, FetchError>(Vec::<WorkQueueItem>::new()) };
    let bench = || async { Ok::<_, FetchError>(Vec::<BenchResult>::new()) };

    let dashboard = Dashboard::start_with(heads, workqueue, bench, &polling());
    tokio::time::sleep(Duration::from_secs(1)).await;

    let mut phases: Vec<_> = dashboard.handles().iter().map(|h| h.watch_phase()).collect();
    let state = dashboard.state().clone();
    dashboard.stop().await;

    for phase in &mut phases {
        assert_eq!(*phase.borrow_and_update(), PollPhase::Idle);
    }
    assert_eq!(state.snapshot().entries().len(), 1);
}
