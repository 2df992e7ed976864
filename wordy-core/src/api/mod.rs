//! Public API for wordy-core
//!
//! This module wires the tokenizer to the accumulator behind a small,
//! configuration-driven interface shared by the CLI and library users.

mod config;
mod error;
mod input;
mod output;
mod processor;


pub use config::{defaults, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use output::{Output, ProcessingMetadata, ProcessingStats};
pub use processor::GroupingProcessor;
