//! CLI argument parsing for travel-distance
//!
//! Global flags: --graph, --config, --format, --quiet, --verbose,
//! --log-level, --log-json. Without a subcommand the navigator starts an
//! interactive session reading numbered modes from stdin.

pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use parse::parse_output_format;
pub use travel_distance_core::format::OutputFormat;

/// Travel Distance - query travel times and routes over a weighted route graph
#[derive(Parser, Debug)]
#[command(name = "travel-distance")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Route file with one `source, destination, weight` line per edge
    #[arg(long, global = true, env = "TRAVEL_DISTANCE_GRAPH")]
    pub graph: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true, env = "TRAVEL_DISTANCE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the configured format, then human)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress banner, prompts and error text
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `trace`, `travel_distance_core=debug`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Travel time along an exact sequence of stops
    Route {
        /// Stops in travel order
        #[arg(required = true, num_args = 1..)]
        stops: Vec<String>,
    },

    /// Routes using at most the given number of stops
    MaxStops {
        source: String,
        destination: String,
        /// Maximum number of stops (edges)
        #[arg(allow_negative_numbers = true)]
        max: i64,
    },

    /// Routes with exactly the given number of stops in between
    ExactStops {
        source: String,
        destination: String,
        /// Intermediate stops between source and destination
        #[arg(allow_negative_numbers = true)]
        between: i64,
    },

    /// Travel time of the shortest route
    Shortest { source: String, destination: String },

    /// Routes whose travel time stays below the given limit
    MaxTime {
        source: String,
        destination: String,
        /// Exclusive upper bound on travel time
        #[arg(allow_negative_numbers = true)]
        max: i64,
    },

    /// Print the loaded route graph
    Show,
}
