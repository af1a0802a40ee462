use clap::ArgMatches;
use tracing::{error, info, warn};

use tstr_core::errors::TstrError;
use tstr_core::events;
use tstr_core::{ConfigError, DashboardConfig};
use tstr_dashboard::ApiClient;

mod bench;
mod heads;
mod watch;
mod workqueue;

pub async fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let config = load_config(matches.get_one::<String>("url").map(String::as_str))?;
    let client = ApiClient::from_config(&config.backend)?;

    info!(
        event = "cli.backend_selected",
        base_url = client.base_url(),
    );

    match matches.subcommand() {
        Some(("heads", sub_matches)) => heads::handle_heads_command(sub_matches, &client).await,
        Some(("bench", sub_matches)) => bench::handle_bench_command(sub_matches, &client).await,
        Some(("workqueue", sub_matches)) => {
            workqueue::handle_workqueue_command(sub_matches, &client).await
        }
        Some(("watch", sub_matches)) => {
            watch::handle_watch_command(sub_matches, &client, &config).await
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Resolve the config hierarchy, apply the `--url` override and validate the
/// result.
fn load_config(url_override: Option<&str>) -> Result<DashboardConfig, ConfigError> {
    let mut config = DashboardConfig::load_hierarchy().inspect_err(report_config_error)?;

    if let Some(url) = url_override {
        config.backend.base_url = Some(url.to_string());
    }

    config.validate().inspect_err(report_config_error)?;
    Ok(config)
}

fn report_config_error(e: &ConfigError) {
    if e.is_user_error() {
        eprintln!(
            "Invalid config: {}\n\
             Tip: Check ~/.tstr/config.toml and ./.tstr/config.toml, or the --url flag.",
            e
        );
        warn!(event = "cli.config.invalid", error = %e, error_code = e.error_code());
    } else {
        eprintln!("Could not load config: {}", e);
        events::log_app_error(e);
    }
}
