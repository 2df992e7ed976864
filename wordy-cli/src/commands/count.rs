//! Grouping count command

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordy_core::{Config, GroupingProcessor, Output};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::InputSource;
use crate::output::{OutputFormat, ReportSummary};

/// Arguments for counting word groupings
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Input file; reads standard input when omitted or "-"
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Number of words per grouping [default: 3]
    #[arg(short, long, value_name = "N", env = "WORDY_GROUPING")]
    pub grouping: Option<usize>,

    /// Number of groupings to return [default: 100]
    #[arg(short, long, value_name = "N", env = "WORDY_TOP")]
    pub top: Option<usize>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Settings after merging flags over the configuration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Core processing configuration
    pub core: Config,
    /// Output format
    pub format: OutputFormat,
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl CountArgs {
    /// Execute the count
    pub fn execute(&self) -> Result<()> {
        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let settings = self.settings(&config)?;

        let source = InputSource::detect(self.file.as_deref())?;
        log::info!(
            "Counting groupings of {} words in {}",
            settings.core.group_size(),
            source.display_name()
        );

        let processor = GroupingProcessor::with_config(settings.core.clone())
            .map_err(CliError::from)?;
        let output = processor
            .process(source.into_input())
            .map_err(CliError::from)
            .with_context(|| "Failed to process input")?;

        if let Some(err) = &output.metadata.read_error {
            log::error!("reading input: {err}");
        }

        let stats = &output.metadata.stats;
        log::info!(
            "Read {} bytes, {} words, {} groupings ({} distinct) in {:?}",
            stats.bytes_processed,
            stats.tokens,
            stats.groupings_completed,
            stats.distinct_groupings,
            output.metadata.duration
        );

        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                write_report(&output, &settings, BufWriter::new(file))
            }
            None => write_report(&output, &settings, BufWriter::new(io::stdout())),
        }
    }

    /// Merge flags, environment and configuration file; flags win
    pub fn settings(&self, config: &CliConfig) -> Result<Settings> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_str(&config.output.format, true).map_err(|_| {
                CliError::ConfigError(format!("unknown format '{}'", config.output.format))
            })?,
        };

        let core = Config::builder()
            .group_size(self.grouping.unwrap_or(config.grouping.size))
            .top(self.top.unwrap_or(config.grouping.top))
            .buffer_size(config.input.buffer_size)
            .max_token_size(config.input.max_token_size)
            .build()
            .map_err(CliError::from)?;

        Ok(Settings {
            core,
            format,
            pretty_json: config.output.pretty_json,
        })
    }
}

/// Write the top entries of `output` through the configured formatter
fn write_report<W>(output: &Output, settings: &Settings, writer: W) -> Result<()>
where
    W: Write + Send + Sync + 'static,
{
    let mut formatter = settings.format.formatter(writer, settings.pretty_json);

    for grouping in output.top() {
        formatter.format_grouping(grouping)?;
    }

    formatter.finish(&ReportSummary {
        group_size: output.metadata.group_size,
        total_groupings: output.report.len(),
        stats: output.metadata.stats,
    })
}
