use crate::graph::{Edge, RouteGraph, Vertex};

pub(crate) fn edge(from: &str, to: &str, weight: i64) -> Edge {
    Edge::new(Vertex::with(from), Vertex::with(to), weight).unwrap()
}

/// The nine-edge space-highway network used throughout the tests
pub(crate) fn space_highways() -> RouteGraph {
    let mut graph = RouteGraph::create();
    for e in [
        edge("Solar System", "Alpha Centauri", 5),
        edge("Solar System", "Betelgeuse", 5),
        edge("Solar System", "Vega", 7),
        edge("Alpha Centauri", "Sirius", 4),
        edge("Betelgeuse", "Sirius", 8),
        edge("Betelgeuse", "Vega", 6),
        edge("Sirius", "Betelgeuse", 8),
        edge("Sirius", "Vega", 2),
        edge("Vega", "Alpha Centauri", 3),
    ] {
        graph.add_edge(e);
    }
    graph
}
