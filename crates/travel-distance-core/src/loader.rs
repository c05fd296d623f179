//! Route-file loader
//!
//! One edge per line, `source, destination, weight`:
//!
//! ```text
//! # space highways
//! Solar System, Alpha Centauri, 5
//! Alpha Centauri, Sirius, 4
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::error::{Result, TravelError};
use crate::graph::{Edge, RouteGraph, Vertex, Weight};
use crate::trace_time;

const FIELD_SEPARATOR: char = ',';

/// Parse a single `source, destination, weight` line.
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_edge_line(line: &str, line_no: usize) -> Result<Edge> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    let [source, destination, weight] = fields.as_slice() else {
        return Err(TravelError::route_line(
            line_no,
            format!(
                "expected 'source, destination, weight' but got {} field(s): '{}'",
                fields.len(),
                line.trim()
            ),
        ));
    };

    if source.is_empty() || destination.is_empty() {
        return Err(TravelError::route_line(
            line_no,
            "source and destination must not be blank",
        ));
    }

    let weight: Weight = weight.parse().map_err(|_| {
        TravelError::route_line(line_no, format!("weight '{}' is not an integer", weight))
    })?;

    Edge::new(Vertex::with(source), Vertex::with(destination), weight)
        .map_err(|err| TravelError::route_line(line_no, err))
}

/// Build a graph from route-file text
pub fn parse_graph(text: &str) -> Result<RouteGraph> {
    let mut graph = RouteGraph::create();
    let mut duplicates = 0usize;

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let edge = parse_edge_line(trimmed, index + 1)?;
        if !graph.add_edge(edge) {
            duplicates += 1;
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        duplicates,
        "route graph parsed"
    );
    Ok(graph)
}

/// Read and parse a route file
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_graph(path: &Path) -> Result<RouteGraph> {
    let start = Instant::now();
    if !path.exists() {
        return Err(TravelError::GraphNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path)?;
    let graph = parse_graph(&text)?;
    trace_time!(start, "load_graph", edges = graph.edge_count());
    Ok(graph)
}
