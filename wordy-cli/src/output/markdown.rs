//! Markdown output formatter

use super::{OutputFormatter, ReportSummary};
use anyhow::Result;
use std::io::Write;
use wordy_core::Grouping;

/// Markdown formatter - outputs groupings as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    header_written: bool,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            header_written: false,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        if !self.header_written {
            writeln!(self.writer, "| Count | Grouping |")?;
            writeln!(self.writer, "|------:|----------|")?;
            self.header_written = true;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_grouping(&mut self, grouping: &Grouping) -> Result<()> {
        self.write_header()?;
        writeln!(self.writer, "| {} | {} |", grouping.count, grouping.text)?;
        Ok(())
    }

    fn finish(&mut self, summary: &ReportSummary) -> Result<()> {
        self.write_header()?;
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total groupings: {}*", summary.total_groupings)?;
        self.writer.flush()?;
        Ok(())
    }
}
