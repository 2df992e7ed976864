//! JSON output formatter

use super::{OutputFormatter, ReportSummary};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use wordy_core::{Grouping, ProcessingStats};

/// JSON formatter - collects groupings and writes one document at the end
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    groupings: Vec<GroupingData>,
}

/// Data structure for one JSON grouping
#[derive(Debug, Serialize, PartialEq)]
pub struct GroupingData {
    /// The space-joined words
    pub grouping: String,
    /// Number of occurrences
    pub count: u64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    group_size: usize,
    total_groupings: usize,
    stats: &'a ProcessingStats,
    groupings: &'a [GroupingData],
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            groupings: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_grouping(&mut self, grouping: &Grouping) -> Result<()> {
        self.groupings.push(GroupingData {
            grouping: grouping.text.clone(),
            count: grouping.count,
        });
        Ok(())
    }

    fn finish(&mut self, summary: &ReportSummary) -> Result<()> {
        let report = JsonReport {
            group_size: summary.group_size,
            total_groupings: summary.total_groupings,
            stats: &summary.stats,
            groupings: &self.groupings,
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &report)?;
        } else {
            serde_json::to_writer(&mut self.writer, &report)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
