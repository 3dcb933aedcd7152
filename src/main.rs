//! triage CLI - Command-line interface
//!
//! Commands:
//!   diagnose   - Diagnose one pair of symptom flags
//!   demo       - Run the canned scenarios
//!   table      - Print the decision table
//!   selfcheck  - Verify the table partitions every input
//!   schema     - Print JSON schema for an output type

mod cli;

use cli::util::{parse_config_arg, strip_global_args};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use triage::*;

/// Env var that overrides the configured log filter
const LOG_ENV: &str = "TRIAGE_LOG";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let rest = strip_global_args(&args[1..]);

    // help and version never read triage.yaml
    match rest.first().map(String::as_str) {
        Some("version" | "--version" | "-v") => {
            println!("triage {}", VERSION);
            return ExitCode::SUCCESS;
        }
        Some("help" | "--help" | "-h") => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    let result = load_config(&args[1..]).and_then(|config| {
        init_logging(&config.logging);
        run(&rest, &config)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn load_config(args: &[String]) -> Result<TriageConfig> {
    let explicit = parse_config_arg(args)?;
    let cwd = std::env::current_dir().map_err(Error::Io)?;
    TriageConfig::resolve(explicit.as_deref(), &cwd)
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    // A second init (tests, embedding) is not an error worth surfacing
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: &[String], config: &TriageConfig) -> Result<()> {
    let Some(cmd) = args.first() else {
        print_usage();
        return Err(Error::Usage("Missing command".into()));
    };
    tracing::debug!(command = %cmd, "dispatching");

    match cmd.as_str() {
        "diagnose" => cli::cmd_diagnose(&args[1..], config),
        "demo" => cli::cmd_demo(&args[1..], config),
        "table" => cli::cmd_table(&args[1..], config),
        "selfcheck" => cli::cmd_selfcheck(&args[1..], config),
        "schema" => cli::cmd_schema(&args[1..]),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            Err(Error::Usage("Unknown command".into()))
        }
    }
}

fn print_usage() {
    println!(
        r#"
triage - two-flag symptom decision table

USAGE:
    triage [--config <file>] <COMMAND> [OPTIONS]

COMMANDS:
    diagnose <fever> <cough>    Diagnose one pair of symptom flags
    demo [--all]                Run the canned scenarios (--all: every input)
    table                       Print the decision table
    selfcheck                   Verify the table partitions every input
    schema [name]               Print JSON schema (report, table, check, config)
    version                     Print version

OPTIONS:
    --config <file>             Config file (default: ./triage.yaml if present)
    --json                      JSON output (diagnose, demo, table, selfcheck)

FLAGS:
    yes/no, y/n, true/false, 1/0 (case-insensitive)

ENVIRONMENT:
    TRIAGE_LOG                  tracing filter, overrides logging.level

EXAMPLES:
    triage diagnose yes no
    triage demo --all --json
    triage selfcheck
"#
    );
}
