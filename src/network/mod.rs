// src/network/mod.rs
//! Airport network: four parallel graphs over the same airports, one per
//! cost metric, plus the city <-> airport index.

pub mod export;
pub mod loader;
pub mod routes;

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::error::NetworkError;
use crate::graph::WeightedGraph;

pub use loader::load;
pub use routes::Route;

pub type Result<T> = std::result::Result<T, NetworkError>;

/// Which edge attribute a query should minimise over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Time,
    Price,
    Frequency,
    /// `1 / frequency`: frequent routes become short edges.
    InverseFrequency,
}

/// One row of the flights file.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub from: String,
    pub to: String,
    pub time: f64,
    pub price: f64,
    pub frequency: f64,
}

#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    time: WeightedGraph<String>,
    price: WeightedGraph<String>,
    frequency: WeightedGraph<String>,
    inverse_frequency: WeightedGraph<String>,
    cities: IndexMap<String, Vec<String>>,
    airport_city: HashMap<String, String>,
}

impl FlightNetwork {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `code` as an airport of `city` in every graph.
    /// Returns false if the airport was already known.
    pub fn add_airport(&mut self, city: &str, code: &str) -> bool {
        if self.airport_city.contains_key(code) {
            return false;
        }
        for graph in self.graphs_mut() {
            graph.add_vertex(code.to_string());
        }
        self.cities
            .entry(city.to_string())
            .or_default()
            .push(code.to_string());
        self.airport_city.insert(code.to_string(), city.to_string());
        true
    }

    /// Adds the flight to all four graphs. Returns false, adding nothing, if
    /// either airport is unknown.
    pub fn add_flight(&mut self, flight: &Flight) -> bool {
        if !self.time.contains(&flight.from) || !self.time.contains(&flight.to) {
            return false;
        }
        let (from, to) = (&flight.from, &flight.to);
        self.time.add_edge(from, to, flight.time);
        self.price.add_edge(from, to, flight.price);
        self.frequency.add_edge(from, to, flight.frequency);
        self.inverse_frequency.add_edge(from, to, 1.0 / flight.frequency);
        true
    }

    #[must_use]
    pub fn graph(&self, metric: Metric) -> &WeightedGraph<String> {
        match metric {
            Metric::Time => &self.time,
            Metric::Price => &self.price,
            Metric::Frequency => &self.frequency,
            Metric::InverseFrequency => &self.inverse_frequency,
        }
    }

    /// Airports serving `city`, in file order.
    ///
    /// # Errors
    /// `UnknownCity` if no airport belongs to `city`.
    pub fn airports_of(&self, city: &str) -> Result<&[String]> {
        self.cities
            .get(city)
            .map(Vec::as_slice)
            .ok_or_else(|| NetworkError::UnknownCity(city.to_string()))
    }

    #[must_use]
    pub fn city_of(&self, airport: &str) -> Option<&str> {
        self.airport_city.get(airport).map(String::as_str)
    }

    #[must_use]
    pub fn airport_count(&self) -> usize {
        self.time.vertex_count()
    }

    #[must_use]
    pub fn route_count(&self) -> usize {
        self.time.edge_count()
    }

    fn graphs_mut(&mut self) -> [&mut WeightedGraph<String>; 4] {
        [
            &mut self.time,
            &mut self.price,
            &mut self.frequency,
            &mut self.inverse_frequency,
        ]
    }
}
