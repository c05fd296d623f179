//! Adjacency store for the route graph

use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use crate::graph::{Edge, Vertex};

/// A directed, weighted and possibly cyclic graph of routes.
///
/// Each vertex maps to the insertion-ordered set of its outgoing edges. A
/// vertex that only ever appears as a destination has no entry of its own.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    pub(crate) adjacency: HashMap<Vertex, Vec<Edge>>,
}

impl RouteGraph {
    /// Create an empty graph
    pub fn create() -> Self {
        Self::default()
    }

    /// Insert `vertex` with no outgoing edges; no-op if already present
    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Drop the adjacency entry of `vertex`.
    ///
    /// Edges elsewhere that point at `vertex` are left untouched.
    pub fn remove_vertex(&mut self, vertex: &Vertex) -> Option<Vec<Edge>> {
        self.adjacency.remove(vertex)
    }

    /// Add an edge to its source's outgoing set, creating the entry if needed.
    ///
    /// Returns `false` when an edge with the same ordered endpoints already
    /// exists; the existing edge (and its weight) is kept.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        let outgoing = self.adjacency.entry(edge.source().clone()).or_default();
        if outgoing.contains(&edge) {
            trace!(edge = %edge, "duplicate edge ignored");
            return false;
        }
        outgoing.push(edge);
        true
    }

    /// Remove every edge equal to `edge` from whichever set holds it.
    ///
    /// Returns the number of edges removed.
    pub fn remove_edge(&mut self, edge: &Edge) -> usize {
        let mut removed = 0;
        for outgoing in self.adjacency.values_mut() {
            let before = outgoing.len();
            outgoing.retain(|e| e != edge);
            removed += before - outgoing.len();
        }
        removed
    }

    /// Outgoing edges of `vertex`, `None` if it has no entry
    pub fn edges_from(&self, vertex: &Vertex) -> Option<&[Edge]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// All edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency.values().flatten()
    }

    /// Vertices that have an adjacency entry
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.adjacency.keys()
    }

    pub fn contains_vertex(&self, vertex: &Vertex) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Number of vertices with an adjacency entry
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl PartialEq for RouteGraph {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency.len() == other.adjacency.len()
            && self.adjacency.iter().all(|(vertex, edges)| {
                other.adjacency.get(vertex).is_some_and(|other_edges| {
                    edges.len() == other_edges.len()
                        && edges.iter().all(|e| other_edges.contains(e))
                })
            })
    }
}

impl Eq for RouteGraph {}

impl fmt::Display for RouteGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Directed weighted graph: ")?;
        let mut entries: Vec<_> = self.adjacency.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        for (vertex, edges) in entries {
            write!(f, "\n{} -- [", vertex)?;
            for (i, edge) in edges.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", edge)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
