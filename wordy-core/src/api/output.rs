//! Output types for the processor

use std::time::Duration;

use crate::report::{Grouping, Report};

/// Processing output: the ranked report plus metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// All groupings, most frequent first
    pub report: Report,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
    /// How many entries the configuration asks to show
    pub(crate) top: usize,
}

/// Metadata about the processing
#[derive(Debug, Clone)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Words per grouping used for this run
    pub group_size: usize,
    /// Additional statistics
    pub stats: ProcessingStats,
    /// Why reading stopped before the end of input, if it did
    pub read_error: Option<String>,
}

/// Counters collected during processing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProcessingStats {
    /// Total bytes read from the input
    pub bytes_processed: usize,
    /// Tokens fed to the accumulator
    pub tokens: usize,
    /// Punctuation bytes stripped from tokens
    pub punctuation_bytes: usize,
    /// Groupings counted, duplicates included
    pub groupings_completed: u64,
    /// Distinct groupings
    pub distinct_groupings: usize,
}

impl Output {
    /// The first `top` entries of the report, as configured
    pub fn top(&self) -> &[Grouping] {
        self.report.top(self.top)
    }

    /// The configured report length
    pub fn top_limit(&self) -> usize {
        self.top
    }
}
