//! Grouping processor: tokenizer feeding the accumulator

use std::time::Instant;

use crate::accumulator::Accumulator;
use crate::api::{Config, Error, Input, Output, ProcessingMetadata, ProcessingStats};
use crate::tokenizer::WordScanner;

/// Counts word groupings over an input stream
#[derive(Debug, Clone, Default)]
pub struct GroupingProcessor {
    config: Config,
}

impl GroupingProcessor {
    /// Create a new processor with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a processor for groupings of `group_size` words
    pub fn with_group_size(group_size: usize) -> Result<Self, Error> {
        let config = Config::builder().group_size(group_size).build()?;
        Self::with_config(config)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scan the whole input and rank its groupings.
    ///
    /// Failing to open the input is an error. A failure while reading ends
    /// the scan early instead: the report covers the input read up to that
    /// point and [`ProcessingMetadata::read_error`] holds the reason.
    pub fn process(&self, input: Input) -> Result<Output, Error> {
        let start = Instant::now();
        log::debug!("processing {:?} with {:?}", input, self.config);

        let reader = input.into_reader()?;
        let mut scanner =
            WordScanner::with_capacity(reader, self.config.buffer_size, self.config.max_token_size);
        let mut accumulator = Accumulator::new(self.config.group_size);
        let mut tokens = 0;

        let mut read_error = None;

        loop {
            let token = match scanner.next_token() {
                Ok(Some(token)) => token,
                Ok(None) => break,
                Err(e) => {
                    // Keep what was counted so far.
                    log::debug!("stopped reading after {} tokens: {}", tokens, e);
                    read_error = Some(e.to_string());
                    break;
                }
            };

            let word = token.to_lowercase();
            if word.is_empty() {
                continue;
            }
            accumulator.add(&word);
            tokens += 1;
        }

        let report = accumulator.report();
        let scanned = scanner.stats();
        let stats = ProcessingStats {
            bytes_processed: scanned.bytes_read,
            tokens,
            punctuation_bytes: scanned.punctuation_bytes,
            groupings_completed: accumulator.completed(),
            distinct_groupings: report.len(),
        };

        let duration = start.elapsed();
        log::debug!("processed in {:?}: {:?}", duration, stats);

        Ok(Output {
            report,
            metadata: ProcessingMetadata {
                duration,
                group_size: self.config.group_size,
                stats,
                read_error,
            },
            top: self.config.top,
        })
    }
}
