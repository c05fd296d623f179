//! Travel Distance - route navigator CLI
//!
//! Loads a directed weighted route graph from a file and answers travel-time,
//! route-enumeration and shortest-route queries, either one-shot through a
//! subcommand or interactively through numbered modes.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use travel_distance_core::config::NavigatorConfig;
use travel_distance_core::error::{ExitCode as TravelExitCode, TravelError};
use travel_distance_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is a global flag, but clap may fail before `Cli.format`
            // exists. Honour a JSON request with a structured error envelope.
            if argv_format_json {
                let travel_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => TravelError::UsageError(err.to_string()),
                };

                eprintln!("{}", travel_error.to_json());
                return ExitCode::from(travel_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let config = match NavigatorConfig::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report_error(&e, cli.format.unwrap_or_default(), cli.quiet),
    };
    let format = cli.format.unwrap_or(config.format);

    match commands::dispatch::run(&cli, config, format, start) {
        Ok(()) => ExitCode::from(TravelExitCode::Success as u8),
        Err(e) => report_error(&e, format, cli.quiet),
    }
}

fn report_error(e: &TravelError, format: OutputFormat, quiet: bool) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
    } else if !quiet {
        eprintln!("error: {}", e);
    }
    ExitCode::from(e.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
