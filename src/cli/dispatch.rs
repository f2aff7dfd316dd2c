//! Executes parsed commands against a loaded network.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use super::command::{Command, OPERATIONS};
use crate::config::Config;
use crate::error::{GraphError, NetworkError};
use crate::network::{self, export, routes, FlightNetwork};

const ARROW: &str = " -> ";
const LIST_SEPARATOR: &str = ", ";
pub const NO_TOUR: &str = "No se encontro recorrido";

/// A loaded network plus the settings and RNG shared by every command.
pub struct Session {
    network: FlightNetwork,
    config: Config,
    rng: StdRng,
}

impl Session {
    #[must_use]
    pub fn new(network: FlightNetwork, config: Config) -> Self {
        let rng = config.rng();
        Self {
            network,
            config,
            rng,
        }
    }

    #[must_use]
    pub fn network(&self) -> &FlightNetwork {
        &self.network
    }

    /// Reads commands from `input` until EOF, answering each on `out`.
    /// Returns the number of commands executed.
    ///
    /// # Errors
    /// Returns error if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<usize> {
        let mut executed = 0;
        for line in input.lines() {
            let line = line?;
            let Some(command) = Command::parse(&line) else {
                if !line.trim().is_empty() {
                    debug!(line = %line, "ignoring malformed command");
                }
                continue;
            };
            self.execute(&command, out)?;
            out.flush()?;
            executed += 1;
        }
        Ok(executed)
    }

    /// Answers one command. Lookup and search failures are logged and
    /// produce no output; only write failures are returned.
    ///
    /// # Errors
    /// Returns error if writing to `out` fails.
    pub fn execute<W: Write>(&mut self, command: &Command, out: &mut W) -> io::Result<()> {
        match self.answer(command) {
            Ok(lines) => {
                for line in lines {
                    writeln!(out, "{line}")?;
                }
            }
            Err(NetworkError::UnknownCity(city)) => warn!(city = %city, "unknown city"),
            Err(e) => warn!(error = %e, "command failed"),
        }
        Ok(())
    }

    fn answer(&mut self, command: &Command) -> network::Result<Vec<String>> {
        match command {
            Command::ListOperations => Ok(OPERATIONS.iter().map(ToString::to_string).collect()),
            Command::BestRoute {
                mode,
                origin,
                destination,
            } => {
                let route = routes::best_route(&self.network, mode.metric(), origin, destination)?;
                Ok(route.map(|r| r.airports.join(ARROW)).into_iter().collect())
            }
            Command::FewestStops {
                origin,
                destination,
            } => {
                let route = routes::fewest_stops(&self.network, origin, destination)?;
                Ok(route.map(|r| r.airports.join(ARROW)).into_iter().collect())
            }
            Command::Vacation { origin, flights } => Ok(vec![self.vacation(origin, *flights)]),
            Command::Centrality { count } => {
                let top = routes::most_central(&self.network, *count)?;
                Ok(vec![top.join(LIST_SEPARATOR)])
            }
            Command::ApproxCentrality { count } => {
                let walks = &self.config.centrality;
                let top = routes::most_central_approx(
                    &self.network,
                    *count,
                    walks.walk_count,
                    walks.walk_length,
                    &mut self.rng,
                )?;
                Ok(vec![top.join(LIST_SEPARATOR)])
            }
            Command::NewAirline { path } => {
                let tree = routes::new_airline(&self.network, &mut self.rng);
                let written = export::export_routes(&self.network, &tree, path)?;
                debug!(path = %path.display(), routes = written, "route file written");
                Ok(vec!["OK".to_string()])
            }
        }
    }

    /// Unknown cities and exhausted searches still answer with `NO_TOUR`.
    fn vacation(&self, origin: &str, flights: usize) -> String {
        let budget = self.config.search.max_cycle_steps;
        match routes::vacation(&self.network, origin, flights, budget) {
            Ok(Some(tour)) => tour.join(ARROW),
            Ok(None) => NO_TOUR.to_string(),
            Err(NetworkError::Graph(GraphError::SearchBudgetExhausted { steps })) => {
                warn!(origin, steps, "tour search budget exhausted");
                NO_TOUR.to_string()
            }
            Err(e) => {
                warn!(origin, error = %e, "tour search failed");
                NO_TOUR.to_string()
            }
        }
    }
}
