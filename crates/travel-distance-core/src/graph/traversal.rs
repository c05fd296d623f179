use crate::graph::{Edge, RouteGraph, Vertex};

/// Read access to adjacency used by the query algorithms
pub trait GraphProvider {
    /// Outgoing edges of `vertex`, or `None` when the vertex has no adjacency entry
    fn outbound_edges(&self, vertex: &Vertex) -> Option<&[Edge]>;

    /// Every edge in the graph, across all adjacency entries
    fn all_edges(&self) -> Box<dyn Iterator<Item = &Edge> + '_>;
}

impl GraphProvider for RouteGraph {
    fn outbound_edges(&self, vertex: &Vertex) -> Option<&[Edge]> {
        self.edges_from(vertex)
    }

    fn all_edges(&self) -> Box<dyn Iterator<Item = &Edge> + '_> {
        Box::new(self.edges())
    }
}
