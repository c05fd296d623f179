//! Numbered query modes
//!
//! The interactive navigator reads lines of the form `<mode> <params>`, where
//! `<params>` is a comma-separated list:
//!
//! | mode | query                   | params                         |
//! |------|-------------------------|--------------------------------|
//! | 1    | travel time for route   | `v1, v2, ...`                  |
//! | 2    | routes with max stops   | `source, destination, max`     |
//! | 3    | routes with exact stops | `source, destination, between` |
//! | 4    | shortest route          | `source, destination`          |
//! | 5    | routes with max time    | `source, destination, max`     |
//! | 6    | exit                    |                                |

use std::fmt;

use serde::Serialize;

use crate::bail_invalid;
use crate::error::{Result, TravelError};
use crate::graph::{FoundRoutes, RouteGraph, TravelTime, Vertex};

const PARAM_SEPARATOR: char = ',';

/// A query mode selected by number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Mode {
    #[serde(rename = "travel-time")]
    TravelTimeForRoute,
    #[serde(rename = "max-stops")]
    RoutesWithMaxStops,
    #[serde(rename = "exact-stops")]
    RoutesWithExactStops,
    #[serde(rename = "shortest-route")]
    ShortestRoute,
    #[serde(rename = "max-time")]
    RoutesWithMaxTime,
    #[serde(rename = "exit")]
    Exit,
}

/// What a query produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryOutcome {
    TravelTime(TravelTime),
    Routes(FoundRoutes),
    Exit,
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutcome::TravelTime(hours) => write!(f, "{}", hours),
            QueryOutcome::Routes(routes) => write!(f, "{}", routes),
            QueryOutcome::Exit => f.write_str("Exiting."),
        }
    }
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Mode::TravelTimeForRoute,
        Mode::RoutesWithMaxStops,
        Mode::RoutesWithExactStops,
        Mode::ShortestRoute,
        Mode::RoutesWithMaxTime,
        Mode::Exit,
    ];

    pub fn number(self) -> i64 {
        match self {
            Mode::TravelTimeForRoute => 1,
            Mode::RoutesWithMaxStops => 2,
            Mode::RoutesWithExactStops => 3,
            Mode::ShortestRoute => 4,
            Mode::RoutesWithMaxTime => 5,
            Mode::Exit => 6,
        }
    }

    pub fn from_number(number: i64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.number() == number)
            .ok_or_else(|| {
                TravelError::invalid_argument(format!(
                    "Please provide valid number from 1-6, yours was: {}",
                    number
                ))
            })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::TravelTimeForRoute => "travel-time",
            Mode::RoutesWithMaxStops => "max-stops",
            Mode::RoutesWithExactStops => "exact-stops",
            Mode::ShortestRoute => "shortest-route",
            Mode::RoutesWithMaxTime => "max-time",
            Mode::Exit => "exit",
        }
    }

    /// Usage text for the parameters this mode expects
    pub fn usage(self) -> &'static str {
        match self {
            Mode::TravelTimeForRoute => "<stop>, <stop>, ...",
            Mode::RoutesWithMaxStops => "<source>, <destination>, <max stops>",
            Mode::RoutesWithExactStops => "<source>, <destination>, <stops in between>",
            Mode::ShortestRoute => "<source>, <destination>",
            Mode::RoutesWithMaxTime => "<source>, <destination>, <max time>",
            Mode::Exit => "",
        }
    }

    /// Split an interactive line into its mode and the raw parameter text.
    pub fn parse_command(line: &str) -> Result<(Mode, &str)> {
        let line = line.trim();
        let (number, params) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        let number: i64 = number.parse().map_err(|_| {
            TravelError::invalid_argument(format!(
                "Please provide valid number from 1-6, yours was: {}",
                number
            ))
        })?;
        Ok((Self::from_number(number)?, params.trim()))
    }

    /// Run this mode against `graph` with comma-separated `raw_params`.
    #[tracing::instrument(skip(graph))]
    pub fn compute(self, graph: &mut RouteGraph, raw_params: &str) -> Result<QueryOutcome> {
        if self == Mode::Exit {
            return Ok(QueryOutcome::Exit);
        }
        if raw_params.trim().is_empty() {
            bail_invalid!(
                "Please provide valid parameters for corresponding mode '{}'.",
                self
            );
        }

        let params: Vec<&str> = raw_params.split(PARAM_SEPARATOR).map(str::trim).collect();

        match self {
            Mode::TravelTimeForRoute => {
                let route: Vec<Vertex> = params
                    .iter()
                    .filter(|param| !param.is_empty())
                    .map(Vertex::with)
                    .collect();
                if route.is_empty() {
                    bail_invalid!(
                        "Please provide valid parameters for corresponding mode '{}'.",
                        self
                    );
                }
                Ok(QueryOutcome::TravelTime(graph.travel_time(&route)))
            }
            Mode::RoutesWithMaxStops => {
                let (source, destination, max_stops) = self.bounded_params(&params, raw_params)?;
                graph
                    .routes_with_max_stops(&source, &destination, max_stops)
                    .map(QueryOutcome::Routes)
            }
            Mode::RoutesWithExactStops => {
                let (source, destination, exact) = self.bounded_params(&params, raw_params)?;
                graph
                    .routes_with_exact_stops(&source, &destination, exact)
                    .map(QueryOutcome::Routes)
            }
            Mode::RoutesWithMaxTime => {
                let (source, destination, max_time) = self.bounded_params(&params, raw_params)?;
                graph
                    .routes_with_max_time(&source, &destination, max_time)
                    .map(QueryOutcome::Routes)
            }
            Mode::ShortestRoute => {
                let [source, destination] = params.as_slice() else {
                    return Err(self.arity_error(raw_params));
                };
                graph
                    .shortest_route(&Vertex::with(source), &Vertex::with(destination))
                    .map(QueryOutcome::TravelTime)
            }
            Mode::Exit => Ok(QueryOutcome::Exit),
        }
    }

    fn bounded_params(self, params: &[&str], raw_params: &str) -> Result<(Vertex, Vertex, i64)> {
        let [source, destination, bound] = params else {
            return Err(self.arity_error(raw_params));
        };
        let bound: i64 = bound.parse().map_err(|_| {
            TravelError::invalid_argument(format!(
                "Mode '{}' expects an integer bound, yours was: '{}'.",
                self, bound
            ))
        })?;
        Ok((Vertex::with(source), Vertex::with(destination), bound))
    }

    fn arity_error(self, raw_params: &str) -> TravelError {
        TravelError::invalid_argument(format!(
            "Mode '{}' needs {}. Yours was: '{}'.",
            self,
            self.usage(),
            raw_params.trim()
        ))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_support::space_highways;

    #[test]
    fn test_from_number() {
        for (number, mode) in (1..=6).zip(Mode::ALL) {
            assert_eq!(Mode::from_number(number).unwrap(), mode);
            assert_eq!(mode.number(), number);
        }
    }

    #[test]
    fn test_from_number_out_of_range() {
        for number in [0, 7, -3] {
            let err = Mode::from_number(number).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("Please provide valid number from 1-6, yours was: {}", number)
            );
        }
    }

    #[test]
    fn test_parse_command() {
        let (mode, params) = Mode::parse_command("  2   Sirius, Vega, 1 ").unwrap();
        assert_eq!(mode, Mode::RoutesWithMaxStops);
        assert_eq!(params, "Sirius, Vega, 1");

        let (mode, params) = Mode::parse_command("6").unwrap();
        assert_eq!(mode, Mode::Exit);
        assert_eq!(params, "");

        let err = Mode::parse_command("two Sirius, Vega").unwrap_err();
        assert!(matches!(err, TravelError::InvalidArgument(_)));
    }

    #[test]
    fn test_compute_travel_time() {
        let mut graph = space_highways();

        let outcome = Mode::TravelTimeForRoute
            .compute(&mut graph, "Solar System, Alpha Centauri, Sirius")
            .unwrap();

        assert_eq!(outcome.to_string(), "9 hours");
    }

    #[test]
    fn test_compute_travel_time_ignores_blank_stops() {
        let mut graph = space_highways();

        let outcome = Mode::TravelTimeForRoute
            .compute(&mut graph, "Solar System, , Betelgeuse,")
            .unwrap();

        assert_eq!(outcome, QueryOutcome::TravelTime(TravelTime::Hours(5)));
    }

    #[test]
    fn test_compute_each_bounded_mode() {
        let mut graph = space_highways();

        let max_stops = Mode::RoutesWithMaxStops
            .compute(&mut graph, "Sirius, Vega, 1")
            .unwrap();
        assert_eq!(
            max_stops.to_string(),
            "1 routes: \n[[Vertex: sirius], [Vertex: vega]]"
        );

        let exact = Mode::RoutesWithExactStops
            .compute(&mut graph, "Solar System, Alpha Centauri, 0")
            .unwrap();
        assert_eq!(
            exact.to_string(),
            "1 routes: \n[[Vertex: solar system], [Vertex: alpha centauri]]"
        );

        let max_time = Mode::RoutesWithMaxTime
            .compute(&mut graph, "Sirius, Vega, 2")
            .unwrap();
        assert_eq!(max_time.to_string(), "NO SUCH ROUTE");
    }

    #[test]
    fn test_compute_shortest_route() {
        let mut graph = space_highways();

        let outcome = Mode::ShortestRoute
            .compute(&mut graph, "Sirius, Sirius")
            .unwrap();

        assert_eq!(outcome.to_string(), "9 hours");
        assert_eq!(graph, space_highways());
    }

    #[test]
    fn test_blank_params_rejected() {
        let mut graph = space_highways();

        let err = Mode::ShortestRoute.compute(&mut graph, "   ").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Please provide valid parameters for corresponding mode 'shortest-route'."
        );
    }

    #[test]
    fn test_wrong_arity_rejected() {
        let mut graph = space_highways();

        let err = Mode::RoutesWithMaxStops
            .compute(&mut graph, "Sirius, Vega")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Mode 'max-stops' needs <source>, <destination>, <max stops>. Yours was: 'Sirius, Vega'."
        );

        let err = Mode::ShortestRoute
            .compute(&mut graph, "Sirius")
            .unwrap_err();
        assert!(matches!(err, TravelError::InvalidArgument(_)));
    }

    #[test]
    fn test_non_integer_bound_rejected() {
        let mut graph = space_highways();

        let err = Mode::RoutesWithMaxTime
            .compute(&mut graph, "Sirius, Vega, soon")
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Mode 'max-time' expects an integer bound, yours was: 'soon'."
        );
    }

    #[test]
    fn test_bound_validation_comes_from_the_query() {
        let mut graph = space_highways();

        let err = Mode::RoutesWithMaxStops
            .compute(&mut graph, "Sirius, Vega, 0")
            .unwrap_err();

        assert_eq!(err.to_string(), "Please provide max stops >0.");
    }

    #[test]
    fn test_exit_needs_no_params() {
        let mut graph = space_highways();

        assert_eq!(
            Mode::Exit.compute(&mut graph, "").unwrap(),
            QueryOutcome::Exit
        );
    }

    #[test]
    fn test_outcome_json() {
        let mut graph = space_highways();

        let hours = Mode::ShortestRoute
            .compute(&mut graph, "Solar System, Sirius")
            .unwrap();
        assert_eq!(
            serde_json::to_value(&hours).unwrap(),
            serde_json::json!({"status": "hours", "hours": 9})
        );

        let routes = Mode::RoutesWithMaxStops
            .compute(&mut graph, "Sirius, Vega, 1")
            .unwrap();
        assert_eq!(
            serde_json::to_value(&routes).unwrap(),
            serde_json::json!([["sirius", "vega"]])
        );
    }
}
