use std::collections::{HashMap, HashSet};
use std::time::Instant;

use tracing::debug;

use crate::error::Result;
use crate::graph::algos::shared::{ensure_non_negative_weights, precondition_failed};
use crate::graph::edge::Weight;
use crate::graph::{Edge, RouteGraph, TravelTime, Vertex};
use crate::trace_time;

/// Temporary duplicate of a vertex that is both source and destination.
///
/// Every edge ending at the original vertex is replaced, in its source's
/// outgoing set, by a copy ending at the synthetic vertex, so the search can
/// tell "leaving" from "arriving". The synthetic vertex is keyed to a fresh
/// set of those retargeted copies. Dropping the splice removes the synthetic
/// vertex and puts every touched outgoing set back exactly as it was.
struct SyntheticSplice<'g> {
    graph: &'g mut RouteGraph,
    vertex: Vertex,
    snapshot: Vec<(Vertex, Vec<Edge>)>,
}

impl<'g> SyntheticSplice<'g> {
    fn apply(graph: &'g mut RouteGraph, original: &Vertex) -> Result<Self> {
        let vertex = Vertex::with(synthetic_label(graph, original));
        let mut splice = Self {
            graph,
            vertex,
            snapshot: Vec::new(),
        };

        let mut incoming = Vec::new();
        for (owner, outgoing) in splice.graph.adjacency.iter_mut() {
            if !outgoing.iter().any(|e| e.destination() == original) {
                continue;
            }
            splice.snapshot.push((owner.clone(), outgoing.clone()));
            for edge in outgoing.iter_mut() {
                if edge.destination() == original {
                    let retargeted = edge.retargeted(splice.vertex.clone())?;
                    incoming.push(retargeted.clone());
                    *edge = retargeted;
                }
            }
        }

        // Incoming edges reused as the synthetic vertex's own entry; the
        // search stops once this vertex settles, so they are never relaxed.
        splice.graph.adjacency.insert(splice.vertex.clone(), incoming);

        debug!(
            synthetic = %splice.vertex,
            touched = splice.snapshot.len(),
            "synthetic destination spliced in"
        );
        Ok(splice)
    }

    fn graph(&self) -> &RouteGraph {
        self.graph
    }

    fn vertex(&self) -> &Vertex {
        &self.vertex
    }
}

impl Drop for SyntheticSplice<'_> {
    fn drop(&mut self) {
        self.graph.remove_vertex(&self.vertex);
        for (owner, outgoing) in self.snapshot.drain(..) {
            self.graph.adjacency.insert(owner, outgoing);
        }
        debug!(synthetic = %self.vertex, "synthetic destination removed");
    }
}

/// Pick a label for the synthetic copy of `original` that no vertex uses:
/// `"l l"`, then `"l l l"`, and so on.
fn synthetic_label(graph: &RouteGraph, original: &Vertex) -> String {
    let raw = original.label();
    let taken: HashSet<&str> = graph
        .vertices()
        .chain(graph.edges().map(Edge::destination))
        .map(Vertex::label)
        .collect();

    let mut candidate = format!("{} {}", raw, raw);
    while taken.contains(candidate.as_str()) {
        candidate.push(' ');
        candidate.push_str(raw);
    }
    candidate
}

/// Settled-set relaxation from `source` until `destination` is settled.
///
/// Each round relaxes every edge leaving the settled set, then settles the
/// closest unsettled vertex. Requires non-negative weights.
fn settled_distance(graph: &RouteGraph, source: &Vertex, destination: &Vertex) -> TravelTime {
    // None = not reached yet
    let mut distance: HashMap<&Vertex, Option<Weight>> = graph
        .vertices()
        .chain(graph.edges().map(Edge::destination))
        .map(|vertex| (vertex, None))
        .collect();
    distance.insert(source, Some(0));

    let mut settled: HashSet<&Vertex> = HashSet::new();
    settled.insert(source);
    let mut rounds = 0usize;

    while !settled.contains(destination) {
        rounds += 1;

        let connecting: Vec<&Edge> = settled
            .iter()
            .filter_map(|vertex| graph.edges_from(vertex))
            .flatten()
            .filter(|edge| !settled.contains(edge.destination()))
            .collect();

        for edge in connecting {
            let Some(from) = distance.get(edge.source()).copied().flatten() else {
                continue;
            };
            // A total past Weight::MAX cannot beat any reachable distance
            let Some(candidate) = from.checked_add(edge.weight()) else {
                continue;
            };
            let slot = distance.entry(edge.destination()).or_insert(None);
            if slot.is_none_or(|current| candidate < current) {
                *slot = Some(candidate);
            }
        }

        let closest = distance
            .iter()
            .filter(|(vertex, _)| !settled.contains(*vertex))
            .filter_map(|(vertex, hours)| hours.map(|hours| (*vertex, hours)))
            .min_by_key(|(_, hours)| *hours)
            .map(|(vertex, _)| vertex);

        match closest {
            Some(vertex) => {
                settled.insert(vertex);
            }
            None => {
                debug!(rounds, "destination unreachable");
                return TravelTime::NoSuchRoute;
            }
        }
    }

    debug!(rounds, settled = settled.len(), "destination settled");
    match distance.get(destination).copied().flatten() {
        Some(hours) => TravelTime::Hours(hours),
        None => TravelTime::NoSuchRoute,
    }
}

/// Travel time of the shortest route from `source` to `destination`.
///
/// When `source == destination` the answer is the cheapest round trip
/// through that vertex. The graph is temporarily extended with a synthetic
/// vertex for such queries and restored before returning, on every path.
///
/// Fails with `InvalidState` if any edge in the graph has a negative weight.
#[tracing::instrument(skip_all, fields(source = %source, destination = %destination))]
pub fn shortest_route(
    graph: &mut RouteGraph,
    source: &Vertex,
    destination: &Vertex,
) -> Result<TravelTime> {
    let start = Instant::now();

    if precondition_failed(&*graph, source, destination) {
        debug!("source has no routes out or destination is never reached");
        return Ok(TravelTime::NoSuchRoute);
    }
    ensure_non_negative_weights(&*graph)?;

    let result = if source == destination {
        let splice = SyntheticSplice::apply(graph, destination)?;
        settled_distance(splice.graph(), source, splice.vertex())
    } else {
        settled_distance(graph, source, destination)
    };

    trace_time!(start, "shortest_route");
    Ok(result)
}
