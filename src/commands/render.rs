//! Rendering of query outcomes, graphs and errors in the selected format

use std::io::Write;

use serde::Serialize;
use serde_json::json;

use crate::cli::OutputFormat;
use travel_distance_core::error::{Result, TravelError};
use travel_distance_core::graph::{Edge, RouteGraph, Vertex};
use travel_distance_core::mode::{Mode, QueryOutcome};

/// JSON envelope for a single query
#[derive(Serialize)]
struct QueryReport<'a> {
    mode: Mode,
    result: &'a QueryOutcome,
}

pub fn write_outcome<W: Write>(
    out: &mut W,
    format: OutputFormat,
    mode: Mode,
    outcome: &QueryOutcome,
) -> Result<()> {
    match format {
        OutputFormat::Human => writeln!(out, "{}", outcome)?,
        OutputFormat::Json => {
            let report = QueryReport {
                mode,
                result: outcome,
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn write_graph<W: Write>(out: &mut W, format: OutputFormat, graph: &RouteGraph) -> Result<()> {
    match format {
        OutputFormat::Human => writeln!(out, "{}", graph)?,
        OutputFormat::Json => {
            let mut vertices: Vec<&Vertex> = graph
                .vertices()
                .chain(graph.edges().map(Edge::destination))
                .collect();
            vertices.sort();
            vertices.dedup();

            let mut edges: Vec<&Edge> = graph.edges().collect();
            edges.sort_by(|a, b| {
                (a.source(), a.destination()).cmp(&(b.source(), b.destination()))
            });

            let value = json!({ "vertices": vertices, "edges": edges });
            serde_json::to_writer(&mut *out, &value)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Report a failed command without ending the process
pub fn write_error<W: Write>(
    out: &mut W,
    format: OutputFormat,
    quiet: bool,
    error: &TravelError,
) -> Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", error.to_json())?,
        OutputFormat::Human if !quiet => writeln!(out, "error: {}", error)?,
        OutputFormat::Human => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use travel_distance_core::graph::TravelTime;
    use travel_distance_core::loader::parse_graph;

    fn rendered(format: OutputFormat, mode: Mode, outcome: &QueryOutcome) -> String {
        let mut out = Vec::new();
        write_outcome(&mut out, format, mode, outcome).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_human_outcome() {
        let outcome = QueryOutcome::TravelTime(TravelTime::Hours(9));
        assert_eq!(
            rendered(OutputFormat::Human, Mode::ShortestRoute, &outcome),
            "9 hours\n"
        );
    }

    #[test]
    fn test_json_outcome() {
        let outcome = QueryOutcome::TravelTime(TravelTime::NoSuchRoute);
        let text = rendered(OutputFormat::Json, Mode::TravelTimeForRoute, &outcome);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            json!({"mode": "travel-time", "result": {"status": "no_such_route"}})
        );
    }

    #[test]
    fn test_json_graph_lists_destination_only_vertices() {
        let graph = parse_graph("b, c, 2\na, b, 1\n").unwrap();
        let mut out = Vec::new();
        write_graph(&mut out, OutputFormat::Json, &graph).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["vertices"], json!(["a", "b", "c"]));
        assert_eq!(
            value["edges"],
            json!([
                {"source": "a", "destination": "b", "weight": 1},
                {"source": "b", "destination": "c", "weight": 2}
            ])
        );
    }

    #[test]
    fn test_quiet_human_error_is_silent() {
        let error = TravelError::invalid_argument("Please provide max stops >0.");

        let mut out = Vec::new();
        write_error(&mut out, OutputFormat::Human, true, &error).unwrap();
        assert!(out.is_empty());

        write_error(&mut out, OutputFormat::Human, false, &error).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "error: Please provide max stops >0.\n"
        );
    }
}
