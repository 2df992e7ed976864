//! Streaming word-grouping frequency counts
//!
//! This crate extracts lowercase letter-only words from a byte stream and
//! counts every contiguous run of `group_size` words (an n-gram), then ranks
//! the runs by frequency.
//!
//! # Architecture
//!
//! - [`tokenizer`]: restartable, UTF-8 aware word split and a buffered
//!   scanner driving it over any reader
//! - [`accumulator`]: the staggered sliding-window counter
//! - [`report`]: ranking of the counted groupings
//! - [`api`]: configuration, inputs and the processor tying them together
//!
//! # Example
//!
//! ```rust
//! use wordy_core::{GroupingProcessor, Input};
//!
//! let processor = GroupingProcessor::with_group_size(2).unwrap();
//! let output = processor
//!     .process(Input::from_text("to be or not to be"))
//!     .unwrap();
//!
//! let top = &output.report.entries()[0];
//! assert_eq!(top.text, "to be");
//! assert_eq!(top.count, 2);
//! ```

pub mod accumulator;
pub mod api;
pub mod report;
pub mod tokenizer;

pub use accumulator::Accumulator;
pub use api::{
    Config, ConfigBuilder, Error, GroupingProcessor, Input, Output, ProcessingMetadata,
    ProcessingStats, Result,
};
pub use report::{Grouping, Report};
pub use tokenizer::{scan_words, Split, WordScanner};
