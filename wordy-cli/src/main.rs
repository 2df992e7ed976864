//! wordy: report the most frequent word groupings in a text

use anyhow::Result;
use clap::Parser;
use wordy_cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
