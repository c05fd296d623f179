//! Directed weighted route graph and the queries it answers
//!
//! - `vertex`, `edge`: the value types
//! - `store`: the adjacency store (`RouteGraph`)
//! - `algos`: travel time, bounded enumeration and shortest route
//! - `traversal`: read-only view the algorithms run against

pub mod algos;
pub mod edge;
mod queries;
pub mod store;
pub mod traversal;
pub mod types;
pub mod vertex;

#[cfg(test)]
pub(crate) mod test_support;

pub use edge::{Edge, Weight};
pub use store::RouteGraph;
pub use traversal::GraphProvider;
pub use types::{FoundRoutes, Route, TravelTime, NO_SUCH_ROUTE};
pub use vertex::Vertex;
