use std::collections::VecDeque;

use tracing::debug;

use crate::bail_invalid;
use crate::error::{Result, TravelError};
use crate::graph::algos::shared::{neighbors, precondition_failed, without_trivial_routes};
use crate::graph::edge::Weight;
use crate::graph::{FoundRoutes, GraphProvider, Vertex};

/// Bound on how far a partial route may be extended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Budget {
    /// At most this many edges
    Stops(usize),
    /// Cumulative weight strictly below this value
    Time(Weight),
}

/// A partial route on the queue, with the weight travelled so far
#[derive(Debug, Clone)]
struct QueuedPath {
    vertices: Vec<Vertex>,
    last: Vertex,
    cost: Weight,
}

impl QueuedPath {
    fn start(source: &Vertex) -> Self {
        Self {
            vertices: vec![source.clone()],
            last: source.clone(),
            cost: 0,
        }
    }

    fn last(&self) -> &Vertex {
        &self.last
    }

    fn extended(&self, next: &Vertex, cost: Weight) -> Self {
        let mut vertices = Vec::with_capacity(self.vertices.len() + 1);
        vertices.extend_from_slice(&self.vertices);
        vertices.push(next.clone());
        Self {
            vertices,
            last: next.clone(),
            cost,
        }
    }
}

/// State tracked during route enumeration
struct BfsState {
    queue: VecDeque<QueuedPath>,
    found: Vec<Vec<Vertex>>,
    dequeued: usize,
    enqueued: usize,
}

impl BfsState {
    fn new(source: &Vertex) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(QueuedPath::start(source));
        Self {
            queue,
            found: Vec::new(),
            dequeued: 0,
            enqueued: 1,
        }
    }

    fn push(&mut self, path: QueuedPath) {
        self.enqueued += 1;
        self.queue.push_back(path);
    }
}

/// Enumerate every route from `source` to `destination` within `budget`.
///
/// Vertices may be revisited, so cyclic tours are found; the budget alone
/// guarantees termination. Routes are returned in discovery order.
fn enumerate_routes(
    provider: &dyn GraphProvider,
    source: &Vertex,
    destination: &Vertex,
    budget: Budget,
) -> Vec<Vec<Vertex>> {
    let mut state = BfsState::new(source);

    while let Some(path) = state.queue.pop_front() {
        state.dequeued += 1;

        if path.last() == destination {
            state.found.push(path.vertices.clone());
        }

        match budget {
            Budget::Stops(max_stops) => {
                if path.vertices.len() <= max_stops {
                    for edge in neighbors(provider, path.last()) {
                        let cost = path.cost.saturating_add(edge.weight());
                        state.push(path.extended(edge.destination(), cost));
                    }
                }
            }
            Budget::Time(max_time) => {
                for edge in neighbors(provider, path.last()) {
                    // Overflow counts as over budget
                    match path.cost.checked_add(edge.weight()) {
                        Some(cost) if cost < max_time => {
                            state.push(path.extended(edge.destination(), cost));
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    debug!(
        ?budget,
        dequeued = state.dequeued,
        enqueued = state.enqueued,
        found = state.found.len(),
        "route enumeration finished"
    );
    state.found
}

fn routes_within_stops(
    provider: &dyn GraphProvider,
    source: &Vertex,
    destination: &Vertex,
    max_stops: usize,
) -> Vec<Vec<Vertex>> {
    if precondition_failed(provider, source, destination) {
        debug!("source has no routes out or destination is never reached");
        return Vec::new();
    }
    enumerate_routes(provider, source, destination, Budget::Stops(max_stops))
}

/// All routes from `source` to `destination` using at most `max_stops` edges.
///
/// The trivial route that never leaves the source is excluded, so a query
/// with `source == destination` reports round trips only.
#[tracing::instrument(skip_all, fields(source = %source, destination = %destination, max_stops = max_stops))]
pub fn routes_with_max_stops(
    provider: &dyn GraphProvider,
    source: &Vertex,
    destination: &Vertex,
    max_stops: i64,
) -> Result<FoundRoutes> {
    if max_stops < 1 {
        bail_invalid!("Please provide max stops >0.");
    }
    let max_stops = usize::try_from(max_stops)
        .map_err(|_| TravelError::invalid_argument("max stops out of range"))?;

    let found = routes_within_stops(provider, source, destination, max_stops);
    Ok(FoundRoutes::new(without_trivial_routes(found)))
}

/// All routes from `source` to `destination` with exactly
/// `exact_in_between` intermediate stops.
///
/// The search runs with a budget of `exact_in_between + 2` edges and keeps
/// only routes made of exactly `exact_in_between + 2` vertices.
#[tracing::instrument(skip_all, fields(source = %source, destination = %destination, exact_in_between = exact_in_between))]
pub fn routes_with_exact_stops(
    provider: &dyn GraphProvider,
    source: &Vertex,
    destination: &Vertex,
    exact_in_between: i64,
) -> Result<FoundRoutes> {
    if exact_in_between < 0 {
        bail_invalid!("Please provide in between stop count >=0.");
    }
    let total = usize::try_from(exact_in_between)
        .ok()
        .and_then(|n| n.checked_add(2))
        .ok_or_else(|| TravelError::invalid_argument("in between stop count out of range"))?;

    let exact: Vec<_> = routes_within_stops(provider, source, destination, total)
        .into_iter()
        .filter(|route| route.len() == total)
        .collect();
    Ok(FoundRoutes::new(without_trivial_routes(exact)))
}

/// All routes from `source` to `destination` whose travel time stays
/// strictly below `max_time`.
///
/// A partial route is only extended while its cumulative weight, including
/// the next edge, remains below the budget. Negative weights are accepted; a
/// reachable cycle of negative total weight never exhausts the budget.
#[tracing::instrument(skip_all, fields(source = %source, destination = %destination, max_time = max_time))]
pub fn routes_with_max_time(
    provider: &dyn GraphProvider,
    source: &Vertex,
    destination: &Vertex,
    max_time: Weight,
) -> Result<FoundRoutes> {
    if max_time < 1 {
        bail_invalid!("Please provide max time >0.");
    }
    if precondition_failed(provider, source, destination) {
        debug!("source has no routes out or destination is never reached");
        return Ok(FoundRoutes::default());
    }

    let departs_in_time = neighbors(provider, source)
        .iter()
        .any(|edge| edge.weight() < max_time);
    if !departs_in_time {
        debug!("every departure from source exceeds the time budget");
        return Ok(FoundRoutes::default());
    }

    let found = enumerate_routes(provider, source, destination, Budget::Time(max_time));
    Ok(FoundRoutes::new(without_trivial_routes(found)))
}
