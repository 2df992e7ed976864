//! wordy CLI library
//!
//! This library provides the command-line interface for counting and
//! ranking word groupings with `wordy-core`.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use commands::Cli;
pub use error::{CliError, CliResult};
