//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use crate::commands::interactive;
use travel_distance_core::bail_usage;
use travel_distance_core::config::NavigatorConfig;
use travel_distance_core::error::Result;
use travel_distance_core::graph::RouteGraph;
use travel_distance_core::loader;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: NavigatorConfig,
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: NavigatorConfig, format: OutputFormat, start: Instant) -> Self {
        Self {
            cli,
            config,
            format,
            start,
        }
    }

    /// Route file from `--graph`/`TRAVEL_DISTANCE_GRAPH`, then the config file
    pub fn graph_path(&self) -> Result<PathBuf> {
        match self.cli.graph.as_ref().or(self.config.graph.as_ref()) {
            Some(path) => Ok(path.clone()),
            None => bail_usage!(
                "no route file given (use --graph <FILE>, TRAVEL_DISTANCE_GRAPH or `graph` in the config file)"
            ),
        }
    }

    pub fn load_graph(&self) -> Result<RouteGraph> {
        let path = self.graph_path()?;
        let graph = loader::load_graph(&path)?;
        tracing::debug!(
            elapsed = ?self.start.elapsed(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "load_graph"
        );
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Interactive session (when no subcommand is provided)
pub struct Interactive;

impl Command for Interactive {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        interactive::handle_interactive(ctx)
    }
}
