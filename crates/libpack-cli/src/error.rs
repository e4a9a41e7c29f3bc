//! Error handling for the libpack CLI.
//!
//! Library errors from `libpack-config` convert automatically via `#[from]`;
//! [`cli_error_to_miette`] renders the final report in `main`.

mod report;

use std::path::PathBuf;
use thiserror::Error;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Option parsing, validation and manifest errors
    #[error(transparent)]
    Config(#[from] libpack_config::ConfigError),

    /// Layered settings failed to extract
    #[error("Invalid settings: {0}")]
    Settings(#[from] figment::Error),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No package name from arguments or manifest
    #[error("No package name for {}", .0.display())]
    MissingPackageName(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use libpack_config::ConfigError;

    #[test]
    fn config_errors_are_transparent() {
        let err: CliError = ConfigError::UnknownFormat("iife".into()).into();
        assert_eq!(
            err.to_string(),
            "unknown module format 'iife' (expected cjs, umd or es)"
        );
    }

    #[test]
    fn io_errors_convert() {
        let err: CliError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, CliError::Io(_)));
    }
}
