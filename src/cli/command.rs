// src/cli/command.rs
//! Parsing of the stdin command protocol.
//!
//! A line is `<keyword> <args>`, where `<args>` is split on commas. City
//! names may contain spaces, so only the first space separates the keyword.

use std::path::PathBuf;

use crate::network::Metric;

pub const LIST_OPERATIONS: &str = "listar_operaciones";
pub const BEST_ROUTE: &str = "camino_mas";
pub const FEWEST_STOPS: &str = "camino_escalas";
pub const VACATION: &str = "vacaciones";
pub const CENTRALITY: &str = "centralidad";
pub const APPROX_CENTRALITY: &str = "centralidad_aprox";
pub const NEW_AIRLINE: &str = "nueva_aerolinea";

/// Operations printed by `listar_operaciones`, in that order.
pub const OPERATIONS: [&str; 6] = [
    BEST_ROUTE,
    FEWEST_STOPS,
    CENTRALITY,
    APPROX_CENTRALITY,
    NEW_AIRLINE,
    VACATION,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMode {
    Cheapest,
    Fastest,
}

impl RouteMode {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "barato" => Some(Self::Cheapest),
            "rapido" => Some(Self::Fastest),
            _ => None,
        }
    }

    #[must_use]
    pub fn metric(self) -> Metric {
        match self {
            Self::Cheapest => Metric::Price,
            Self::Fastest => Metric::Time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListOperations,
    BestRoute {
        mode: RouteMode,
        origin: String,
        destination: String,
    },
    FewestStops {
        origin: String,
        destination: String,
    },
    Vacation {
        origin: String,
        flights: usize,
    },
    Centrality {
        count: usize,
    },
    ApproxCentrality {
        count: usize,
    },
    NewAirline {
        path: PathBuf,
    },
}

impl Command {
    /// Parses one input line. `None` for blank, unknown or malformed lines.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end();
        let (keyword, rest) = line.split_once(' ').unwrap_or((line, ""));
        if keyword == NEW_AIRLINE {
            return (!rest.is_empty()).then(|| Self::NewAirline {
                path: PathBuf::from(rest),
            });
        }
        let args: Vec<&str> = rest.split(',').collect();

        match (keyword, args.as_slice()) {
            (LIST_OPERATIONS, _) => Some(Self::ListOperations),
            (BEST_ROUTE, [mode, origin, destination]) => Some(Self::BestRoute {
                mode: RouteMode::parse(mode)?,
                origin: (*origin).to_string(),
                destination: (*destination).to_string(),
            }),
            (FEWEST_STOPS, [origin, destination]) => Some(Self::FewestStops {
                origin: (*origin).to_string(),
                destination: (*destination).to_string(),
            }),
            (VACATION, [origin, flights]) => Some(Self::Vacation {
                origin: (*origin).to_string(),
                flights: count(flights)?,
            }),
            (CENTRALITY, [n]) => Some(Self::Centrality { count: count(n)? }),
            (APPROX_CENTRALITY, [n]) => Some(Self::ApproxCentrality { count: count(n)? }),
            _ => None,
        }
    }
}

/// Plain decimal digits only; signs and whitespace are rejected.
fn count(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
