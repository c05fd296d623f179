//! Command implementations for the one-shot subcommands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::query;
use travel_distance_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Route { stops } => query::handle_route(ctx, stops),
            Commands::MaxStops {
                source,
                destination,
                max,
            } => query::handle_max_stops(ctx, source, destination, *max),
            Commands::ExactStops {
                source,
                destination,
                between,
            } => query::handle_exact_stops(ctx, source, destination, *between),
            Commands::Shortest {
                source,
                destination,
            } => query::handle_shortest(ctx, source, destination),
            Commands::MaxTime {
                source,
                destination,
                max,
            } => query::handle_max_time(ctx, source, destination, *max),
            Commands::Show => query::handle_show(ctx),
        }
    }
}
