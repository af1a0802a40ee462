use clap::ArgMatches;
use tracing::{error, info};

use tstr_core::{WorkQueueItem, events};
use tstr_dashboard::ApiClient;
use tstr_dashboard::api::{Fetch, workqueue_source};

use crate::table::TableFormatter;

pub(crate) async fn handle_workqueue_command(
    matches: &ArgMatches,
    client: &ApiClient,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.workqueue_started", json_output = json_output);

    let items = match workqueue_source(client).fetch().await {
        Ok(items) => items,
        Err(e) => {
            eprintln!("Failed to fetch work queue: {}", e);
            error!(event = "cli.workqueue_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else if items.is_empty() {
        println!("Work queue is empty.");
    } else {
        workqueue_table(&items).print_table();
    }

    info!(event = "cli.workqueue_completed", count = items.len());
    Ok(())
}

pub(crate) fn workqueue_table(items: &[WorkQueueItem]) -> TableFormatter {
    let rows = items
        .iter()
        .map(|item| {
            vec![
                item.id.to_string(),
                item.job.branch.clone(),
                item.job.sha.chars().take(10).collect(),
                item.job.what.to_string(),
                item.job.state.to_string(),
                item.state.to_string(),
                item.when.format("%Y-%m-%d %H:%M:%S").to_string(),
            ]
        })
        .collect();

    TableFormatter::new(
        &[
            ("Id", 8),
            ("Head", 30),
            ("Sha", 10),
            ("Job", 9),
            ("Job State", 9),
            ("Queue", 8),
            ("Queued", 19),
        ],
        rows,
    )
}
