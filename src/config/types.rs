use serde::{Deserialize, Serialize};

/// Top-level shape of `flycombi.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub centrality: CentralityConfig,
    #[serde(default)]
    pub search: SearchConfig,
    /// Fixed RNG seed; entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentralityConfig {
    #[serde(default = "default_walk_count")]
    pub walk_count: usize,
    #[serde(default = "default_walk_length")]
    pub walk_length: usize,
}

impl Default for CentralityConfig {
    fn default() -> Self {
        Self {
            walk_count: default_walk_count(),
            walk_length: default_walk_length(),
        }
    }
}

fn default_walk_count() -> usize { 100 }
fn default_walk_length() -> usize { 100 }

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Vertices the tour search may enter before giving up. Unlimited if unset.
    #[serde(default)]
    pub max_cycle_steps: Option<u64>,
}
