// src/network/loader.rs
//! Reads the airports and flights CSV files into a [`FlightNetwork`].
//!
//! Airports: `city,code[,...]`. Flights: `from,to,time,price,frequency[,...]`.
//! Trailing columns are ignored, blank lines are skipped.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use super::{Flight, FlightNetwork, Result};
use crate::error::NetworkError;

/// Counts reported after a flights file has been read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlightLoad {
    pub added: usize,
    /// Flights naming an airport absent from the airports file.
    pub skipped: usize,
}

/// Loads both files into a fresh network.
///
/// # Errors
/// `Io` if a file cannot be read, `Parse` on the first malformed line.
pub fn load(airports: &Path, flights: &Path) -> Result<FlightNetwork> {
    let mut network = FlightNetwork::new();

    let content = read(airports)?;
    let count = parse_airports(&mut network, airports, &content)?;
    info!(path = %airports.display(), airports = count, "airports loaded");

    let content = read(flights)?;
    let load = parse_flights(&mut network, flights, &content)?;
    info!(
        path = %flights.display(),
        flights = load.added,
        skipped = load.skipped,
        "flights loaded"
    );

    Ok(network)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| NetworkError::Io {
        source,
        path: path.to_path_buf(),
    })
}

/// Adds every airport in `content`; `path` only labels errors.
/// Returns the number of new airports.
///
/// # Errors
/// `Parse` when a line has fewer than two fields or an empty field.
pub fn parse_airports(network: &mut FlightNetwork, path: &Path, content: &str) -> Result<usize> {
    let mut added = 0;
    for (index, line) in numbered_lines(content) {
        let mut fields = line.split(',').map(str::trim);
        let (Some(city), Some(code)) = (fields.next(), fields.next()) else {
            return Err(parse_error(path, index, "expected `city,code`"));
        };
        if city.is_empty() || code.is_empty() {
            return Err(parse_error(path, index, "empty city or airport code"));
        }
        if network.add_airport(city, code) {
            added += 1;
        } else {
            debug!(code, "duplicate airport ignored");
        }
    }
    Ok(added)
}

/// Adds every flight in `content` to the four metric graphs.
///
/// # Errors
/// `Parse` on a short line, a non-numeric field, a negative time or price,
/// or a frequency that is not strictly positive.
pub fn parse_flights(
    network: &mut FlightNetwork,
    path: &Path,
    content: &str,
) -> Result<FlightLoad> {
    let mut load = FlightLoad::default();
    for (index, line) in numbered_lines(content) {
        let flight = parse_flight(line).map_err(|reason| parse_error(path, index, &reason))?;
        if network.add_flight(&flight) {
            load.added += 1;
        } else {
            warn!(
                from = %flight.from,
                to = %flight.to,
                line = index,
                "flight references unknown airport, skipped"
            );
            load.skipped += 1;
        }
    }
    Ok(load)
}

fn parse_flight(line: &str) -> std::result::Result<Flight, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [from, to, time, price, frequency, ..] = fields.as_slice() else {
        return Err("expected `from,to,time,price,frequency`".to_string());
    };

    let time = number("time", time)?;
    let price = number("price", price)?;
    let frequency = number("frequency", frequency)?;
    if time < 0.0 || price < 0.0 {
        return Err("time and price must not be negative".to_string());
    }
    if frequency <= 0.0 {
        return Err(format!("frequency must be positive, got {frequency}"));
    }

    Ok(Flight {
        from: (*from).to_string(),
        to: (*to).to_string(),
        time,
        price,
        frequency,
    })
}

fn number(field: &str, raw: &str) -> std::result::Result<f64, String> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(format!("invalid {field}: {raw:?}")),
    }
}

/// Non-blank lines with their 1-based line numbers.
fn numbered_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn parse_error(path: &Path, line: usize, reason: &str) -> NetworkError {
    NetworkError::Parse {
        path: path.to_path_buf(),
        line,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Metric;

    const AIRPORTS: &str = "Paris,CDG\nParis,ORY\n\nRome,FCO,extra\n";

    fn network() -> FlightNetwork {
        let mut network = FlightNetwork::new();
        parse_airports(&mut network, Path::new("airports.csv"), AIRPORTS).expect("valid airports");
        network
    }

    #[test]
    fn test_airports_with_blank_and_extra_columns() {
        let mut network = FlightNetwork::new();
        let added = parse_airports(&mut network, Path::new("a.csv"), AIRPORTS).expect("valid");
        assert_eq!(added, 3);
        assert_eq!(network.airports_of("Rome").expect("known").len(), 1);
    }

    #[test]
    fn test_flights_loaded_into_every_graph() {
        let mut network = network();
        let load = parse_flights(
            &mut network,
            Path::new("f.csv"),
            "CDG,FCO,120,80,4\nORY,FCO,150,60,2\n",
        )
        .expect("valid flights");
        assert_eq!(load, FlightLoad { added: 2, skipped: 0 });
        let (a, b) = ("ORY".to_string(), "FCO".to_string());
        assert_eq!(network.graph(Metric::InverseFrequency).weight(&a, &b), Some(0.5));
    }

    #[test]
    fn test_unknown_airport_is_skipped() {
        let mut network = network();
        let load = parse_flights(&mut network, Path::new("f.csv"), "CDG,JFK,400,500,1\n")
            .expect("skipping is not an error");
        assert_eq!(load, FlightLoad { added: 0, skipped: 1 });
    }

    #[test]
    fn test_malformed_flights_report_line() {
        let cases = [
            ("CDG,FCO,120,80\n", 1, "short line"),
            ("\nCDG,FCO,fast,80,4\n", 2, "non-numeric time"),
            ("CDG,FCO,120,80,0\n", 1, "zero frequency"),
            ("CDG,FCO,120,-5,1\n", 1, "negative price"),
            ("CDG,FCO,120,80,1\nCDG,ORY,NaN,1,1\n", 2, "nan time"),
        ];
        for (content, expected_line, desc) in cases {
            let mut network = network();
            match parse_flights(&mut network, Path::new("f.csv"), content) {
                Err(NetworkError::Parse { line, .. }) => {
                    assert_eq!(line, expected_line, "{desc}");
                }
                other => panic!("{desc}: expected parse error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_malformed_airport_line() {
        let mut network = FlightNetwork::new();
        let err = parse_airports(&mut network, Path::new("a.csv"), "Paris,CDG\nLonely\n")
            .expect_err("second line has one field");
        assert_eq!(err.to_string(), "a.csv:2: expected `city,code`");
    }

    #[test]
    fn test_missing_file_keeps_path() {
        let missing = Path::new("/nonexistent/flycombi/airports.csv");
        match load(missing, missing) {
            Err(NetworkError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected I/O error, got {other:?}"),
        }
    }
}
