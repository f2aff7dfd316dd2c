// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Precondition failures raised by the graph core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("vertex not in graph: {0}")]
    InvalidVertex(String),

    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("negative edge weight {weight} between {from} and {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("cycle search gave up after {steps} steps")]
    SearchBudgetExhausted { steps: u64 },
}

pub type Result<T> = std::result::Result<T, GraphError>;

/// Failures while loading or exporting an airport network.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("{path}:{line}: {reason}")]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("unknown city: {0}")]
    UnknownCity(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
