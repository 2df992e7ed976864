//! Configuration module

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CliResult;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Grouping configuration
    #[serde(default)]
    pub grouping: GroupingConfig,

    /// Input buffering configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Grouping-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GroupingConfig {
    /// Number of words per grouping
    pub size: usize,

    /// Number of groupings to print
    pub top: usize,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            size: wordy_core::api::defaults::GROUP_SIZE,
            top: wordy_core::api::defaults::TOP,
        }
    }
}

/// Input-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Initial read buffer size (bytes)
    pub buffer_size: usize,

    /// Maximum bytes a single word may span
    pub max_token_size: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            buffer_size: wordy_core::api::defaults::BUFFER_SIZE,
            max_token_size: wordy_core::api::defaults::MAX_TOKEN_SIZE,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> CliResult<Self> {
        let config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.grouping.size, 3);
        assert_eq!(config.grouping.top, 100);
        assert_eq!(config.input.buffer_size, 4096);
        assert_eq!(config.output.format, "text");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = CliConfig::parse(
            r#"
            [grouping]
            size = 2

            [output]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.grouping.size, 2);
        assert_eq!(config.grouping.top, 100);
        assert_eq!(config.output.format, "json");
        assert!(config.output.pretty_json);
        assert_eq!(config.input, InputConfig::default());
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(CliConfig::parse("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_parse_invalid_config() {
        assert!(CliConfig::parse("[grouping]\nsize = \"three\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wordy.toml");
        fs::write(&path, "[grouping]\ntop = 5\n").unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.grouping.top, 5);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/wordy.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
