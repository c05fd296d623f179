use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::Vertex;

/// Cost of traversing a single edge, in hours
pub type Weight = i64;

/// A directed, weighted connection between two distinct vertices.
///
/// Identity is the ordered `(source, destination)` pair only; the weight is
/// ignored by `PartialEq` and `Hash`. An adjacency set therefore never holds
/// two edges between the same ordered endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    source: Vertex,
    destination: Vertex,
    weight: Weight,
}

fn check_self_reference(source: &Vertex, destination: &Vertex) -> Result<()> {
    if source == destination {
        bail_invalid!("No self reference allowed.");
    }
    Ok(())
}

impl Edge {
    /// Create an edge, rejecting self-loops
    pub fn new(source: Vertex, destination: Vertex, weight: Weight) -> Result<Self> {
        check_self_reference(&source, &destination)?;
        Ok(Self {
            source,
            destination,
            weight,
        })
    }

    pub fn source(&self) -> &Vertex {
        &self.source
    }

    pub fn destination(&self) -> &Vertex {
        &self.destination
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn set_source(&mut self, source: Vertex) -> Result<()> {
        check_self_reference(&source, &self.destination)?;
        self.source = source;
        Ok(())
    }

    pub fn set_destination(&mut self, destination: Vertex) -> Result<()> {
        check_self_reference(&self.source, &destination)?;
        self.destination = destination;
        Ok(())
    }

    pub fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }

    /// Copy of this edge pointing at a different destination
    pub(crate) fn retargeted(&self, destination: Vertex) -> Result<Self> {
        Edge::new(self.source.clone(), destination, self.weight)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.destination == other.destination
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.destination.hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Edge: '{}' --({})-> '{}']",
            self.source.label(),
            self.weight,
            self.destination.label()
        )
    }
}
