//! One-shot query subcommands

use std::io::{self, Write};
use std::time::Instant;

use crate::commands::dispatch::CommandContext;
use crate::commands::render;
use travel_distance_core::bail_usage;
use travel_distance_core::error::Result;
use travel_distance_core::graph::{RouteGraph, Vertex};
use travel_distance_core::mode::{Mode, QueryOutcome};
use travel_distance_core::trace_time;

/// Load the graph, run `query` against it and print the outcome
fn run_query<F>(ctx: &CommandContext, mode: Mode, query: F) -> Result<()>
where
    F: FnOnce(&mut RouteGraph) -> Result<QueryOutcome>,
{
    let mut graph = ctx.load_graph()?;

    let start = Instant::now();
    let outcome = query(&mut graph)?;
    trace_time!(start, "query", mode = mode.as_str());

    let mut out = io::stdout().lock();
    render::write_outcome(&mut out, ctx.format, mode, &outcome)?;
    out.flush()?;
    Ok(())
}

pub fn handle_route(ctx: &CommandContext, stops: &[String]) -> Result<()> {
    let route: Vec<Vertex> = stops
        .iter()
        .map(|stop| stop.trim())
        .filter(|stop| !stop.is_empty())
        .map(Vertex::with)
        .collect();
    if route.is_empty() {
        bail_usage!("route needs at least one non-blank stop");
    }

    run_query(ctx, Mode::TravelTimeForRoute, |graph| {
        Ok(QueryOutcome::TravelTime(graph.travel_time(&route)))
    })
}

pub fn handle_max_stops(
    ctx: &CommandContext,
    source: &str,
    destination: &str,
    max_stops: i64,
) -> Result<()> {
    let (source, destination) = (Vertex::with(source), Vertex::with(destination));
    run_query(ctx, Mode::RoutesWithMaxStops, |graph| {
        graph
            .routes_with_max_stops(&source, &destination, max_stops)
            .map(QueryOutcome::Routes)
    })
}

pub fn handle_exact_stops(
    ctx: &CommandContext,
    source: &str,
    destination: &str,
    in_between: i64,
) -> Result<()> {
    let (source, destination) = (Vertex::with(source), Vertex::with(destination));
    run_query(ctx, Mode::RoutesWithExactStops, |graph| {
        graph
            .routes_with_exact_stops(&source, &destination, in_between)
            .map(QueryOutcome::Routes)
    })
}

pub fn handle_shortest(ctx: &CommandContext, source: &str, destination: &str) -> Result<()> {
    let (source, destination) = (Vertex::with(source), Vertex::with(destination));
    run_query(ctx, Mode::ShortestRoute, |graph| {
        graph
            .shortest_route(&source, &destination)
            .map(QueryOutcome::TravelTime)
    })
}

pub fn handle_max_time(
    ctx: &CommandContext,
    source: &str,
    destination: &str,
    max_time: i64,
) -> Result<()> {
    let (source, destination) = (Vertex::with(source), Vertex::with(destination));
    run_query(ctx, Mode::RoutesWithMaxTime, |graph| {
        graph
            .routes_with_max_time(&source, &destination, max_time)
            .map(QueryOutcome::Routes)
    })
}

pub fn handle_show(ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;
    let mut out = io::stdout().lock();
    render::write_graph(&mut out, ctx.format, &graph)?;
    out.flush()?;
    Ok(())
}
