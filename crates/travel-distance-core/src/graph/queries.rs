//! Query entry points on `RouteGraph`

use crate::error::Result;
use crate::graph::algos::{
    routes_with_exact_stops, routes_with_max_stops, routes_with_max_time, shortest_route,
    travel_time,
};
use crate::graph::{FoundRoutes, RouteGraph, TravelTime, Vertex, Weight};

impl RouteGraph {
    /// Travel time along `route`, see [`travel_time`]
    pub fn travel_time(&self, route: &[Vertex]) -> TravelTime {
        travel_time(self, route)
    }

    pub fn routes_with_max_stops(
        &self,
        source: &Vertex,
        destination: &Vertex,
        max_stops: i64,
    ) -> Result<FoundRoutes> {
        routes_with_max_stops(self, source, destination, max_stops)
    }

    pub fn routes_with_exact_stops(
        &self,
        source: &Vertex,
        destination: &Vertex,
        exact_in_between: i64,
    ) -> Result<FoundRoutes> {
        routes_with_exact_stops(self, source, destination, exact_in_between)
    }

    pub fn routes_with_max_time(
        &self,
        source: &Vertex,
        destination: &Vertex,
        max_time: Weight,
    ) -> Result<FoundRoutes> {
        routes_with_max_time(self, source, destination, max_time)
    }

    /// Cheapest travel time, see [`shortest_route`].
    ///
    /// Takes `&mut self` because round-trip queries splice a temporary vertex
    /// into the graph; the graph is unchanged once this returns.
    pub fn shortest_route(&mut self, source: &Vertex, destination: &Vertex) -> Result<TravelTime> {
        shortest_route(self, source, destination)
    }
}
