use clap::ArgMatches;
use tracing::{error, info};

use tstr_core::{StatusEntry, derive_status_entries, events};
use tstr_dashboard::ApiClient;
use tstr_dashboard::api::{Fetch, heads_source};

use crate::table::TableFormatter;

pub(crate) async fn handle_heads_command(
    matches: &ArgMatches,
    client: &ApiClient,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.heads_started", json_output = json_output);

    let records = match heads_source(client).fetch().await {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Failed to fetch heads: {}", e);
            error!(event = "cli.heads_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let entries = derive_status_entries(&records);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if entries.is_empty() {
        println!("No heads tracked.");
    } else {
        heads_table(&entries).print_table();
    }

    info!(event = "cli.heads_completed", count = entries.len());
    Ok(())
}

pub(crate) fn heads_table(entries: &[StatusEntry]) -> TableFormatter {
    let rows = entries
        .iter()
        .map(|entry| {
            let latest = entry
                .commits
                .first()
                .map(|commit| commit.sha.chars().take(10).collect())
                .unwrap_or_else(|| "-".to_string());
            vec![
                entry.display_name.clone(),
                entry.kind.to_string(),
                entry.state.to_string(),
                entry.commits.len().to_string(),
                latest,
            ]
        })
        .collect();

    TableFormatter::new(
        &[
            ("Head", 40),
            ("Kind", 6),
            ("State", 9),
            ("Commits", 7),
            ("Latest", 10),
        ],
        rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tstr_core::{CommitStatus, EntryKind, EntryState};

    #[test]
    fn test_heads_table_rows() {
        let entries = vec![
            StatusEntry {
                display_name: "wip-rgw (#42)".to_string(),
                kind: EntryKind::PullRequest,
                state: EntryState::Scheduled,
                commits: vec![CommitStatus {
                    sha: "0123456789abcdef".to_string(),
                }],
            },
            StatusEntry {
                display_name: "main".to_string(),
                kind: EntryKind::Branch,
                state: EntryState::Scheduled,
                commits: Vec::new(),
            },
        ];

        let rendered = heads_table(&entries).render();

        assert!(rendered.contains("wip-rgw (#42)"));
        assert!(rendered.contains("0123456789"));
        assert!(!rendered.contains("0123456789a"));
        assert!(rendered.contains("scheduled"));
        let main_row = rendered.lines().find(|l| l.contains("main")).unwrap();
        assert!(main_row.contains("branch"));
        assert!(main_row.contains("│ -"));
    }
}
