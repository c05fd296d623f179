use crate::graph::algos::shared::path_weight;
use crate::graph::{GraphProvider, TravelTime, Vertex};

/// Total travel time along an exact sequence of stops.
///
/// Every consecutive pair must be joined by an edge, otherwise the route does
/// not exist. Zero or one stop costs nothing. A total that overflows is
/// reported as no route.
#[tracing::instrument(skip_all, fields(stops = route.len()))]
pub fn travel_time(provider: &dyn GraphProvider, route: &[Vertex]) -> TravelTime {
    match path_weight(provider, route) {
        Some(hours) => TravelTime::Hours(hours),
        None => TravelTime::NoSuchRoute,
    }
}
