use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "flycombi",
    version,
    about = "Airport route planner",
    long_about = "Loads an airport network and answers route queries read line by line from stdin."
)]
pub struct Cli {
    /// Airports file: `city,code` per line
    pub airports: PathBuf,
    /// Flights file: `from,to,time,price,frequency` per line
    pub flights: PathBuf,
    /// Config file (defaults to ./flycombi.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Seed for the random engines; overrides the config file
    #[arg(long)]
    pub seed: Option<u64>,
    /// Log loading and search details to stderr
    #[arg(long, short)]
    pub verbose: bool,
}
