// src/config/mod.rs
pub mod types;

pub use self::types::{CentralityConfig, Config, SearchConfig};

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

pub const CONFIG_FILE: &str = "flycombi.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `path`, or `flycombi.toml` in the working directory when `path`
    /// is `None`. A missing default file yields the defaults; an explicitly
    /// named file must exist.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p, true),
            None => (Path::new(CONFIG_FILE), false),
        };

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content)
                .with_context(|| format!("invalid config {}", path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound && !required => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e).with_context(|| format!("cannot read config {}", path.display())),
        }
    }

    /// Parses TOML text; absent keys take their defaults.
    ///
    /// # Errors
    /// Returns error on malformed TOML or mistyped values.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Session RNG: seeded from `seed` when set, from entropy otherwise.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
