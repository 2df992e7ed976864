//! Input source selection: a named file or piped standard input

use anyhow::Result;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use wordy_core::Input;

use crate::error::CliError;

/// Where the text to scan comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file on disk
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Pick the source for this run.
    ///
    /// A file argument wins; `-` names standard input explicitly. Without a
    /// file, standard input is used unless it is an interactive terminal.
    pub fn resolve(file: Option<&Path>, stdin_is_terminal: bool) -> Result<Self> {
        match file {
            Some(path) if path == Path::new("-") => Ok(InputSource::Stdin),
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::FileNotFound(path.display().to_string()).into());
                }
                Ok(InputSource::File(path.to_path_buf()))
            }
            None if stdin_is_terminal => {
                Err(CliError::InvalidInput("No input provided".to_string()).into())
            }
            None => Ok(InputSource::Stdin),
        }
    }

    /// Resolve against the real standard input
    pub fn detect(file: Option<&Path>) -> Result<Self> {
        Self::resolve(file, io::stdin().is_terminal())
    }

    /// Human-readable name for logging
    pub fn display_name(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }

    /// Convert into a core input
    pub fn into_input(self) -> Input {
        match self {
            InputSource::File(path) => Input::from_file(path),
            InputSource::Stdin => Input::from_reader(io::stdin()),
        }
    }
}
