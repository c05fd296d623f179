//! Command dispatch logic for travel-distance

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use travel_distance_core::config::NavigatorConfig;
use travel_distance_core::error::Result;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, Interactive};

pub fn run(cli: &Cli, config: NavigatorConfig, format: OutputFormat, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, format, start);

    debug!(elapsed = ?start.elapsed(), %format, "resolve_settings");

    match &cli.command {
        None => Interactive.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
