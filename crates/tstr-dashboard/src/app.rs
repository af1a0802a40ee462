use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("tstr-dash")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Terminal dashboard for the tstr CI backend")
        .long_about("tstr-dash polls the tstr backend for tracked heads, the CI work queue and benchmark results. One-shot subcommands print a single snapshot; 'watch' keeps every feed refreshing until interrupted.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("url")
                .long("url")
                .value_name("BASE_URL")
                .help("Backend base URL (overrides config)")
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("heads")
                .about("Show CI status for tracked branches and pull requests")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("bench")
                .about("Show benchmark results grouped by test type")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("workqueue")
                .about("Show the CI work queue")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("watch")
                .about("Poll every feed and re-render until Ctrl-C")
                .arg(
                    Arg::new("iterations")
                        .long("iterations")
                        .short('n')
                        .help("Exit after this many renders")
                        .value_parser(value_parser!(u64).range(1..))
                )
                .arg(
                    Arg::new("render-interval-ms")
                        .long("render-interval-ms")
                        .help("Milliseconds between renders")
                        .value_parser(value_parser!(u64).range(1..))
                        .default_value("1000")
                )
        )
}
