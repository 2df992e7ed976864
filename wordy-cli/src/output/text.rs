//! Plain text output formatter

use super::{OutputFormatter, ReportSummary};
use anyhow::Result;
use std::io::Write;
use wordy_core::Grouping;

/// Plain text formatter - outputs one "<count> - <grouping>" line each
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_grouping(&mut self, grouping: &Grouping) -> Result<()> {
        writeln!(self.writer, "{grouping}")?;
        Ok(())
    }

    fn finish(&mut self, _summary: &ReportSummary) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::SharedBuffer;

    #[test]
    fn test_text_lines() {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone());

        formatter
            .format_grouping(&Grouping {
                text: "they are so".into(),
                count: 2,
            })
            .unwrap();
        formatter
            .format_grouping(&Grouping {
                text: "i love tacos".into(),
                count: 1,
            })
            .unwrap();
        formatter.finish(&ReportSummary::default()).unwrap();

        assert_eq!(buffer.contents(), "2 - they are so\n1 - i love tacos\n");
    }
}
