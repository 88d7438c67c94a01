//! Command-line interface
//!
//! Argument parsing and the runner that drives the feed controller from
//! a terminal session.

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
