use std::fmt;

use serde::Serialize;

use crate::graph::edge::Weight;
use crate::graph::Vertex;

/// Text reported for queries that have no answer
pub const NO_SUCH_ROUTE: &str = "NO SUCH ROUTE";

/// Result of a single-cost query: a number of hours, or no route at all.
///
/// Displays as `"<n> hours"` or `"NO SUCH ROUTE"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "hours")]
pub enum TravelTime {
    Hours(Weight),
    NoSuchRoute,
}

impl TravelTime {
    pub fn hours(&self) -> Option<Weight> {
        match self {
            TravelTime::Hours(hours) => Some(*hours),
            TravelTime::NoSuchRoute => None,
        }
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelTime::Hours(hours) => write!(f, "{} hours", hours),
            TravelTime::NoSuchRoute => f.write_str(NO_SUCH_ROUTE),
        }
    }
}

/// An ordered sequence of vertices starting at a query's source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Route(Vec<Vertex>);

impl Route {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Route(vertices)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.0
    }

    /// Number of vertices on the route
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of edges traversed (vertex count - 1)
    pub fn stops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn last(&self) -> Option<&Vertex> {
        self.0.last()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, vertex) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", vertex)?;
        }
        f.write_str("]")
    }
}

/// Routes found by an enumeration query, in breadth-first discovery order.
///
/// Displays as `"NO SUCH ROUTE"` when empty, otherwise as
/// `"<count> routes: \n"` followed by one route per line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FoundRoutes(Vec<Route>);

impl FoundRoutes {
    pub fn new(routes: Vec<Route>) -> Self {
        FoundRoutes(routes)
    }

    pub fn routes(&self) -> &[Route] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for FoundRoutes {
    type Item = Route;
    type IntoIter = std::vec::IntoIter<Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for FoundRoutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str(NO_SUCH_ROUTE);
        }
        write!(f, "{} routes: ", self.0.len())?;
        for route in &self.0 {
            write!(f, "\n{}", route)?;
        }
        Ok(())
    }
}
