use std::io::{self, BufWriter};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use flycombi_core::cli::{Cli, Session};
use flycombi_core::config::Config;
use flycombi_core::exit::FlyCombiExit;
use flycombi_core::network;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> FlyCombiExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => FlyCombiExit::Success,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            FlyCombiExit::for_error(&e)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let network = network::load(&cli.airports, &cli.flights)?;
    info!(
        airports = network.airport_count(),
        routes = network.route_count(),
        "network ready"
    );

    let mut session = Session::new(network, config);
    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    let executed = session.run(stdin.lock(), &mut out)?;
    info!(commands = executed, "input exhausted");
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}
