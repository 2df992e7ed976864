//! Configuration API for grouping counts

use crate::api::Error;

/// Default configuration constants
pub mod defaults {
    /// Default number of words per grouping
    pub const GROUP_SIZE: usize = 3;

    /// Default number of groupings to report
    pub const TOP: usize = 100;

    /// Default initial read buffer size in bytes (4KB)
    pub const BUFFER_SIZE: usize = crate::tokenizer::DEFAULT_BUFFER_SIZE;

    /// Default maximum bytes a single word may span (64KB)
    pub const MAX_TOKEN_SIZE: usize = crate::tokenizer::MAX_TOKEN_SIZE;
}

/// Processing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) group_size: usize,
    pub(crate) top: usize,
    pub(crate) buffer_size: usize,    // in bytes
    pub(crate) max_token_size: usize, // in bytes
}

impl Default for Config {
    fn default() -> Self {
        Self {
            group_size: defaults::GROUP_SIZE,
            top: defaults::TOP,
            buffer_size: defaults::BUFFER_SIZE,
            max_token_size: defaults::MAX_TOKEN_SIZE,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Number of words per grouping
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Number of groupings to report
    pub fn top(&self) -> usize {
        self.top
    }

    /// Initial read buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Maximum bytes a single word may span
    pub fn max_token_size(&self) -> usize {
        self.max_token_size
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.group_size == 0 {
            return Err(Error::Configuration(
                "group_size must be greater than 0".into(),
            ));
        }

        if self.top == 0 {
            return Err(Error::Configuration("top must be greater than 0".into()));
        }

        if self.buffer_size == 0 {
            return Err(Error::Configuration(
                "buffer_size must be greater than 0".into(),
            ));
        }

        if self.buffer_size > self.max_token_size {
            return Err(Error::Configuration(format!(
                "buffer_size ({}) must not exceed max_token_size ({})",
                self.buffer_size, self.max_token_size
            )));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    group_size: Option<usize>,
    top: Option<usize>,
    buffer_size: Option<usize>,
    max_token_size: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of words per grouping
    pub fn group_size(mut self, words: usize) -> Self {
        self.group_size = Some(words);
        self
    }

    /// Set the number of groupings to report
    pub fn top(mut self, count: usize) -> Self {
        self.top = Some(count);
        self
    }

    /// Set the initial read buffer size in bytes
    pub fn buffer_size(mut self, bytes: usize) -> Self {
        self.buffer_size = Some(bytes);
        self
    }

    /// Set the maximum bytes a single word may span
    pub fn max_token_size(mut self, bytes: usize) -> Self {
        self.max_token_size = Some(bytes);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(words) = self.group_size {
            config.group_size = words;
        }

        if let Some(count) = self.top {
            config.top = count;
        }

        if let Some(bytes) = self.buffer_size {
            config.buffer_size = bytes;
        }

        if let Some(bytes) = self.max_token_size {
            config.max_token_size = bytes;
        }

        config.validate()?;
        Ok(config)
    }
}
