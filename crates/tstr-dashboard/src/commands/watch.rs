use std::io::IsTerminal;
use std::time::Duration;

use clap::ArgMatches;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use tstr_core::{DashboardConfig, events};
use tstr_dashboard::{ApiClient, Dashboard, DashboardState, Feed, FeedStatus};

use super::heads::heads_table;
use super::workqueue::workqueue_table;
use crate::table::TableFormatter;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub(crate) async fn handle_watch_command(
    matches: &ArgMatches,
    client: &ApiClient,
    config: &DashboardConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let iterations = matches.get_one::<u64>("iterations").copied();
    let render_interval = Duration::from_millis(
        matches
            .get_one::<u64>("render-interval-ms")
            .copied()
            .unwrap_or(1000),
    );

    info!(
        event = "cli.watch_started",
        iterations = ?iterations,
        render_interval_ms = render_interval.as_millis() as u64,
    );

    let dashboard = Dashboard::start(client, &config.polling);

    let mut ticker = tokio::time::interval(render_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let clear = std::io::stdout().is_terminal();
    let mut renders: u64 = 0;
    let mut interrupted = Ok(());

    loop {
        tokio::select! {
            result = &mut ctrl_c => {
                info!(event = "cli.watch_interrupted");
                interrupted = result;
                break;
            }
            _ = ticker.tick() => {
                renders += 1;
                if clear {
                    print!("{}", CLEAR_SCREEN);
                }
                println!("{}", render_dashboard(client.base_url(), &dashboard.snapshot()));

                if iterations.is_some_and(|limit| renders >= limit) {
                    break;
                }
            }
        }
    }

    events::log_app_shutdown();
    dashboard.stop().await;

    if let Err(e) = &interrupted {
        warn!(event = "cli.watch_signal_failed", error = %e);
    }
    interrupted?;

    info!(event = "cli.watch_completed", renders = renders);
    Ok(())
}

pub(crate) fn render_dashboard(base_url: &str, state: &DashboardState) -> String {
    let mut out = Vec::new();
    out.push(format!("tstr @ {}", base_url));
    out.push(String::new());

    out.push(section_title("Heads", state.feed_status(Feed::Heads)));
    if state.entries().is_empty() {
        out.push("No heads tracked.".to_string());
    } else {
        out.push(heads_table(state.entries()).render());
    }
    out.push(String::new());

    out.push(section_title("Work queue", state.feed_status(Feed::WorkQueue)));
    if state.wq_items().is_empty() {
        out.push("Work queue is empty.".to_string());
    } else {
        out.push(workqueue_table(state.wq_items()).render());
    }
    out.push(String::new());

    out.push(section_title("Benchmarks", state.feed_status(Feed::BenchResults)));
    if state.bench().is_empty() {
        out.push("No benchmark results.".to_string());
    } else {
        let rows = state
            .bench()
            .test_types()
            .iter()
            .map(|test_type| {
                let latest = test_type
                    .entries
                    .iter()
                    .map(|entry| &entry.result)
                    .max_by_key(|result| result.date);
                vec![
                    test_type.key.to_string(),
                    test_type.entries.len().to_string(),
                    latest.map_or_else(|| "-".to_string(), |r| r.version.clone()),
                    latest.map_or_else(
                        || "-".to_string(),
                        |r| r.date.format("%Y-%m-%d").to_string(),
                    ),
                ]
            })
            .collect();
        let table = TableFormatter::new(
            &[
                ("Test Type", 48),
                ("Runs", 5),
                ("Version", 20),
                ("Last Run", 10),
            ],
            rows,
        );
        out.push(table.render());
    }

    out.join("\n")
}

fn section_title(title: &str, status: &FeedStatus) -> String {
    format!("{} [{}]", title, feed_label(status))
}

fn feed_label(status: &FeedStatus) -> String {
    match (status.last_success, status.is_stale()) {
        (None, false) => "waiting for first poll".to_string(),
        (None, true) => format!("unavailable, {} failed polls", status.consecutive_failures),
        (Some(at), false) => format!("updated {}", at.format("%H:%M:%S")),
        (Some(at), true) => format!(
            "stale since {}, {} failed polls",
            at.format("%H:%M:%S"),
            status.consecutive_failures
        ),
    }
}
