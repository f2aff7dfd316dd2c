// src/network/export.rs
//! Writes a route set back out in the flights file format.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::{FlightNetwork, Metric, Result};
use crate::error::NetworkError;
use crate::graph::WeightedGraph;

/// Writes one `from,to,time,price,frequency` line per edge of `routes`,
/// taking the attributes from `network`.
///
/// # Errors
/// Propagates write failures.
pub fn write_routes<W: Write>(
    network: &FlightNetwork,
    routes: &WeightedGraph<String>,
    out: &mut W,
) -> io::Result<usize> {
    let mut written = 0;
    for ((from, to), _) in routes.edges() {
        let field = |metric| {
            network
                .graph(metric)
                .weight(&from, &to)
                .map(|w| w.to_string())
                .unwrap_or_default()
        };
        writeln!(
            out,
            "{from},{to},{},{},{}",
            field(Metric::Time),
            field(Metric::Price),
            field(Metric::Frequency)
        )?;
        written += 1;
    }
    Ok(written)
}

/// Creates (or truncates) `path` and writes `routes` into it.
///
/// # Errors
/// `Io` carrying `path` when the file cannot be created or written.
pub fn export_routes(
    network: &FlightNetwork,
    routes: &WeightedGraph<String>,
    path: &Path,
) -> Result<usize> {
    let io_error = |source| NetworkError::Io {
        source,
        path: path.to_path_buf(),
    };
    let file = File::create(path).map_err(io_error)?;
    let mut out = BufWriter::new(file);
    let written = write_routes(network, routes, &mut out).map_err(io_error)?;
    out.flush().map_err(io_error)?;
    Ok(written)
}
