use crate::bail_state;
use crate::error::Result;
use crate::graph::edge::Weight;
use crate::graph::{Edge, GraphProvider, Route, Vertex};

/// Check whether a query between `source` and `destination` can have any answer.
///
/// Fails when the source has no outgoing edges, or when no edge anywhere in
/// the graph ends at the destination.
pub fn precondition_failed(
    provider: &dyn GraphProvider,
    source: &Vertex,
    destination: &Vertex,
) -> bool {
    let source_invalid = provider
        .outbound_edges(source)
        .is_none_or(|edges| edges.is_empty());
    let destination_invalid = !provider
        .all_edges()
        .any(|edge| edge.destination() == destination);
    source_invalid || destination_invalid
}

/// Find the edge from `from` to `to`, if the graph has one
pub fn find_edge<'a>(
    provider: &'a dyn GraphProvider,
    from: &Vertex,
    to: &Vertex,
) -> Option<&'a Edge> {
    provider
        .outbound_edges(from)?
        .iter()
        .find(|edge| edge.destination() == to)
}

/// Sum edge weights along consecutive vertex pairs.
///
/// Returns `None` as soon as a pair has no connecting edge, or when the
/// total no longer fits in a `Weight`.
pub fn path_weight(provider: &dyn GraphProvider, vertices: &[Vertex]) -> Option<Weight> {
    vertices.windows(2).try_fold(0, |total: Weight, pair| {
        find_edge(provider, &pair[0], &pair[1])
            .and_then(|edge| total.checked_add(edge.weight()))
    })
}

/// Destinations reachable in one hop, in adjacency order
pub fn neighbors<'a>(provider: &'a dyn GraphProvider, vertex: &Vertex) -> &'a [Edge] {
    provider.outbound_edges(vertex).unwrap_or(&[])
}

/// Drop the trivial single-vertex route (source reached without moving)
pub fn without_trivial_routes(routes: Vec<Vec<Vertex>>) -> Vec<Route> {
    routes
        .into_iter()
        .filter(|route| route.len() > 1)
        .map(Route::new)
        .collect()
}

/// Reject graphs holding any negative weight.
///
/// Weight-driven searches are undefined on such graphs and may not terminate.
pub fn ensure_non_negative_weights(provider: &dyn GraphProvider) -> Result<()> {
    if let Some(edge) = provider.all_edges().find(|edge| edge.weight() < 0) {
        tracing::warn!(edge = %edge, "negative weight found");
        bail_state!(format!(
            "graph is in a non-appropriate state: negative weight on {}",
            edge
        ));
    }
    Ok(())
}
