//! Error types for the instrumenter CLI
//!
//! Provides structured error handling with proper error chains.

use thiserror::Error;

/// Main error type for the instrumenter CLI
#[derive(Error, Debug)]
pub enum CliError {
    /// Malformed command-line invocation: missing required value,
    /// unknown flag, or a flag given without its value
    #[error("usage error: {message}")]
    Usage {
        message: String,
        #[source]
        source: Option<clap::Error>,
    },
}

impl CliError {
    /// Create a new usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
            source: None,
        }
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        Self::Usage {
            message: err.kind().to_string(),
            source: Some(err),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error_display() {
        let err = CliError::usage("missing required argument");
        assert_eq!(err.to_string(), "usage error: missing required argument");
    }

    #[test]
    fn test_clap_error_is_kept_as_source() {
        let clap_err = clap::Error::new(clap::error::ErrorKind::UnknownArgument);
        let err = CliError::from(clap_err);
        let CliError::Usage { source, .. } = err;
        assert!(source.is_some());
    }
}
