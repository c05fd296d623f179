//! Route-finding algorithms
//!
//! - `route_cost`: travel time along a fixed route
//! - `bfs`: route enumeration under a stop or time budget
//! - `dijkstra`: cheapest route, including round trips
//! - `shared`: helpers used by more than one algorithm

pub mod bfs;
pub mod dijkstra;
pub mod route_cost;
pub mod shared;

pub use bfs::{routes_with_exact_stops, routes_with_max_stops, routes_with_max_time};
pub use dijkstra::shortest_route;
pub use route_cost::travel_time;
