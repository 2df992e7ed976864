//! CLI command implementations

use anyhow::Result;
use clap::Parser;

pub mod count;

pub use count::CountArgs;

/// Report the most frequent word groupings in a text.
///
/// Reads FILE, or standard input when no FILE is given.
#[derive(Debug, Parser)]
#[command(name = "wordy", version, about)]
pub struct Cli {
    /// Grouping options
    #[command(flatten)]
    pub count: CountArgs,

    /// Log every window update
    #[arg(long)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::debug!("Arguments: {:?}", self);
        self.count.execute()
    }

    /// Log level implied by the flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        if self.debug {
            return "trace";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        // RUST_LOG still takes precedence over the flags.
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level()),
        )
        .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["wordy"]).unwrap();
        assert_eq!(cli.count.file, None);
        assert_eq!(cli.count.grouping, None);
        assert_eq!(cli.count.top, None);
        assert_eq!(cli.count.format, None);
        assert!(!cli.debug);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "wordy",
            "-g",
            "2",
            "--top",
            "10",
            "-f",
            "json",
            "-o",
            "out.json",
            "-c",
            "wordy.toml",
            "-vv",
            "input.txt",
        ])
        .unwrap();

        assert_eq!(cli.count.grouping, Some(2));
        assert_eq!(cli.count.top, Some(10));
        assert_eq!(cli.count.format, Some(OutputFormat::Json));
        assert_eq!(cli.count.output, Some(PathBuf::from("out.json")));
        assert_eq!(cli.count.config, Some(PathBuf::from("wordy.toml")));
        assert_eq!(cli.count.file, Some(PathBuf::from("input.txt")));
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_log_levels() {
        let cli = Cli::try_parse_from(["wordy", "--debug"]).unwrap();
        assert_eq!(cli.log_level(), "trace");

        let cli = Cli::try_parse_from(["wordy", "-q", "--debug"]).unwrap();
        assert_eq!(cli.log_level(), "error");

        let cli = Cli::try_parse_from(["wordy", "-vvvv"]).unwrap();
        assert_eq!(cli.log_level(), "trace");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["wordy", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_rejects_non_numeric_grouping() {
        assert!(Cli::try_parse_from(["wordy", "--grouping", "three"]).is_err());
    }
}
