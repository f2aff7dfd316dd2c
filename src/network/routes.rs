// src/network/routes.rs
//! City-level queries over a [`FlightNetwork`].
//!
//! Cities may have several airports: route queries try every origin airport
//! and keep the best arrival at any destination airport.

use rand::Rng;
use tracing::debug;

use super::{FlightNetwork, Metric, Result};
use crate::graph::{
    approximate_centrality, betweenness_centrality, bounded_cycle, breadth_first,
    minimum_spanning_tree, rank, shortest_path, WeightedGraph,
};

/// Airports from origin to destination, both inclusive, with the summed
/// metric (hop count for fewest-stops routes).
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub airports: Vec<String>,
    pub cost: f64,
}

/// Cheapest or fastest route between two cities.
///
/// # Errors
/// `UnknownCity` for either city; `Graph` if a weight is negative.
pub fn best_route(
    network: &FlightNetwork,
    metric: Metric,
    origin: &str,
    destination: &str,
) -> Result<Option<Route>> {
    let graph = network.graph(metric);
    let targets = network.airports_of(destination)?;

    let mut best: Option<Route> = None;
    for airport in network.airports_of(origin)? {
        let paths = shortest_path(graph, airport, targets)?;
        let Some((target, cost)) = paths.closest_target() else {
            continue;
        };
        if best.as_ref().is_some_and(|b| b.cost <= cost) {
            continue;
        }
        if let Some(airports) = paths.path_to(target) {
            best = Some(Route { airports, cost });
        }
    }
    Ok(best)
}

/// Route with the fewest flights between two cities, ignoring weights.
///
/// # Errors
/// `UnknownCity` for either city.
pub fn fewest_stops(
    network: &FlightNetwork,
    origin: &str,
    destination: &str,
) -> Result<Option<Route>> {
    let graph = network.graph(Metric::Time);
    let targets = network.airports_of(destination)?;

    let mut best: Option<(usize, Vec<String>)> = None;
    for airport in network.airports_of(origin)? {
        let search = breadth_first(graph, airport, targets)?;
        let (Some(found), Some(depth)) = (search.found.as_ref(), search.found_depth()) else {
            continue;
        };
        if best.as_ref().is_some_and(|(d, _)| *d <= depth) {
            continue;
        }
        if let Some(path) = search.path_to(found) {
            best = Some((depth, path));
        }
    }

    Ok(best.map(|(depth, airports)| Route {
        airports,
        cost: hops(depth),
    }))
}

#[allow(clippy::cast_precision_loss)]
fn hops(depth: usize) -> f64 {
    depth as f64
}

/// Closed tour of exactly `flights` flights that leaves `origin` and returns
/// to the same airport without visiting any airport twice.
///
/// The tour is returned with the starting airport at both ends. Fewer than two
/// flights never forms a tour.
///
/// # Errors
/// `UnknownCity`, or `Graph(SearchBudgetExhausted)` when `budget` runs out.
pub fn vacation(
    network: &FlightNetwork,
    origin: &str,
    flights: usize,
    budget: Option<u64>,
) -> Result<Option<Vec<String>>> {
    let airports = network.airports_of(origin)?;
    if flights < 2 {
        return Ok(None);
    }

    let graph = network.graph(Metric::Time);
    for airport in airports {
        let stops = bounded_cycle(graph, airport, flights - 1, budget)?;
        if stops.is_empty() {
            debug!(airport = %airport, flights, "no tour from airport");
            continue;
        }
        let mut tour = Vec::with_capacity(flights + 1);
        tour.push(airport.clone());
        tour.extend(stops);
        tour.push(airport.clone());
        return Ok(Some(tour));
    }
    Ok(None)
}

/// Top `n` airports by exact betweenness on the inverse-frequency graph, so
/// busy routes count as short.
///
/// # Errors
/// `Graph` if a weight is negative.
pub fn most_central(network: &FlightNetwork, n: usize) -> Result<Vec<String>> {
    let scores = betweenness_centrality(network.graph(Metric::InverseFrequency))?;
    Ok(rank(&scores, n).into_iter().map(|(v, _)| v).collect())
}

/// Top `n` airports by random-walk visits on the frequency graph.
///
/// # Errors
/// `Graph(EmptyGraph)` if the network has no airports and walks were requested.
pub fn most_central_approx<R: Rng + ?Sized>(
    network: &FlightNetwork,
    n: usize,
    walk_count: usize,
    walk_length: usize,
    rng: &mut R,
) -> Result<Vec<String>> {
    let scores = approximate_centrality(
        network.graph(Metric::Frequency),
        walk_count,
        walk_length,
        rng,
    )?;
    Ok(rank(&scores, n).into_iter().map(|(v, _)| v).collect())
}

/// Minimum set of routes, by price, keeping every airport of the root's
/// component reachable.
#[must_use]
pub fn new_airline<R: Rng + ?Sized>(network: &FlightNetwork, rng: &mut R) -> WeightedGraph<String> {
    minimum_spanning_tree(network.graph(Metric::Price), rng)
}
