//! Input abstraction for the processor

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

/// Byte sources the processor can scan
pub enum Input {
    /// Direct text input
    Text(String),
    /// Raw bytes input
    Bytes(Vec<u8>),
    /// File path input, streamed rather than read whole
    File(PathBuf),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Open the input as a reader
    pub(crate) fn into_reader(self) -> Result<Box<dyn Read + Send>, crate::api::Error> {
        match self {
            Input::Text(text) => Ok(Box::new(Cursor::new(text.into_bytes()))),
            Input::Bytes(bytes) => Ok(Box::new(Cursor::new(bytes))),
            Input::File(path) => {
                let file = File::open(&path).map_err(|e| {
                    crate::api::Error::Infrastructure(format!(
                        "Failed to open file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                Ok(Box::new(file))
            }
            Input::Reader(reader) => Ok(reader),
        }
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::from_text(text)
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}
