//! Error types for the API

use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Infrastructure error (opening inputs, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    /// I/O failure while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A single word needed more buffered bytes than allowed
    #[error("Token too long: a word exceeded {limit} bytes")]
    TokenTooLong {
        /// The configured maximum token size in bytes
        limit: usize,
    },
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::Configuration("group_size must be greater than 0".into());
        assert_eq!(
            error.to_string(),
            "Configuration error: group_size must be greater than 0"
        );

        let error = Error::TokenTooLong { limit: 16 };
        assert_eq!(error.to_string(), "Token too long: a word exceeded 16 bytes");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read");
        let error: Error = io.into();
        assert!(matches!(error, Error::Io(_)));
        assert!(error.to_string().contains("short read"));
    }
}
