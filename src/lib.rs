pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod network;
