// src/cli/mod.rs
//! Command-line arguments and the stdin command interpreter.

pub mod args;
pub mod command;
pub mod dispatch;

pub use args::Cli;
pub use command::{Command, RouteMode};
pub use dispatch::Session;
