//! Output formatting module

use anyhow::Result;
use std::io::Write;
use wordy_core::{Grouping, ProcessingStats};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single grouping
    fn format_grouping(&mut self, grouping: &Grouping) -> Result<()>;

    /// Finalize output (e.g., close JSON document)
    fn finish(&mut self, summary: &ReportSummary) -> Result<()>;
}

/// Facts about the whole run, available to formatters at the end
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportSummary {
    /// Words per grouping
    pub group_size: usize,
    /// Distinct groupings in the full report, before truncation
    pub total_groupings: usize,
    /// Processing counters
    pub stats: ProcessingStats,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One "<count> - <grouping>" line per grouping
    Text,
    /// JSON document with the groupings and run statistics
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// Build a formatter writing to `writer`
    pub fn formatter<W>(self, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
