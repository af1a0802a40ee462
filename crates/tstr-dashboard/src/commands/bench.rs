use std::collections::BTreeSet;

use clap::ArgMatches;
use tracing::{error, info};

use tstr_core::format::humanize_rate;
use tstr_core::{TestType, aggregate, events};
use tstr_dashboard::ApiClient;
use tstr_dashboard::api::{Fetch, bench_results_source};

use crate::table::TableFormatter;

pub(crate) async fn handle_bench_command(
    matches: &ArgMatches,
    client: &ApiClient,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.bench_started", json_output = json_output);

    let results = match bench_results_source(client).fetch().await {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Failed to fetch benchmark results: {}", e);
            error!(event = "cli.bench_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let bench = aggregate(results);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&bench)?);
    } else if bench.is_empty() {
        println!("No benchmark results.");
    } else {
        for test_type in bench.test_types() {
            println!("{} ({} runs)", test_type.key, test_type.entries.len());
            test_type_table(test_type).print_table();
            println!();
        }
    }

    info!(
        event = "cli.bench_completed",
        count = bench.all_results.len(),
        test_types = bench.test_types().len(),
    );
    Ok(())
}

/// One row per run; one throughput column per operation seen in the group.
pub(crate) fn test_type_table(test_type: &TestType) -> TableFormatter {
    let op_names: BTreeSet<&str> = test_type
        .entries
        .iter()
        .flat_map(|entry| entry.ops_by_name.keys().map(String::as_str))
        .collect();

    let headers: Vec<String> = op_names.iter().map(|name| name.to_uppercase()).collect();
    let mut columns: Vec<(&str, usize)> = vec![
        ("Id", 8),
        ("Version", 20),
        ("Date", 16),
        ("Threads", 7),
    ];
    columns.extend(headers.iter().map(|header| (header.as_str(), 14)));

    let rows = test_type
        .entries
        .iter()
        .map(|entry| {
            let mut row = vec![
                entry.result.id.to_string(),
                entry.result.version.clone(),
                entry.result.date.format("%Y-%m-%d %H:%M").to_string(),
                entry.result.thread_count.to_string(),
            ];
            row.extend(op_names.iter().map(|name| {
                entry
                    .op(name)
                    .map(|op| humanize_rate(op.bytes_per_sec))
                    .unwrap_or_else(|| "-".to_string())
            }));
            row
        })
        .collect();

    TableFormatter::new(&columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tstr_core::{BenchOpResult, BenchResult};

    fn run(id: u64, ops: &[(&str, f64)]) -> BenchResult {
        BenchResult {
            id,
            version: "v17.2.0".to_string(),
            date: Utc.with_ymd_and_hms(2022, 6, 1, 8, 30, 0).unwrap(),
            duration_seconds: 60.0,
            duration_label: "60s".to_string(),
            thread_count: 8,
            workload: "mixed".to_string(),
            object_size: "4K".to_string(),
            object_count: 1000,
            ops: ops
                .iter()
                .map(|(name, bytes)| BenchOpResult {
                    name: name.to_string(),
                    percent_of_baseline: 100.0,
                    ops_per_sec: 1.0,
                    objs_per_sec: 1.0,
                    bytes_per_sec: *bytes,
                })
                .collect(),
        }
    }

    #[test]
    fn test_type_table_has_column_per_op() {
        let bench = aggregate(vec![
            run(1, &[("GET", 1_500_000.0), ("PUT", 999.0)]),
            run(2, &[("get", 2_000_000.0)]),
        ]);
        let rendered = test_type_table(&bench.test_types()[0]).render();

        let header = rendered.lines().nth(1).unwrap();
        assert!(header.contains("GET"));
        assert!(header.contains("PUT"));

        let first = rendered.lines().find(|l| l.starts_with("│ 1 ")).unwrap();
        assert!(first.contains("1.5 MB/s"));
        assert!(first.contains("999 B/s"));
        assert!(first.contains("2022-06-01 08:30"));

        let second = rendered.lines().find(|l| l.starts_with("│ 2 ")).unwrap();
        assert!(second.contains("2 MB/s"));
        assert!(second.contains("│ -"));
    }
}
