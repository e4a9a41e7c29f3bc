//! Error types for option parsing, validation and manifest loading.
//!
//! The composer itself is infallible. Everything here happens at the edges:
//! turning strings into enumerations, pre-flight checks a caller runs before
//! composing, and reading `package.json`.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Invalid enumeration input
    #[error("unknown module format '{0}' (expected cjs, umd or es)")]
    UnknownFormat(String),

    #[error("unknown environment '{0}' (expected development or production)")]
    UnknownEnvironment(String),

    #[error("unknown target platform '{0}' (expected node or browser)")]
    UnknownTarget(String),

    // Pre-flight validation
    #[error("package name is empty or sanitizes to an empty file name: '{name}'")]
    EmptyPackageName { name: String },

    #[error("invalid global name '{name}': {reason}")]
    InvalidGlobalName { name: String, reason: String },

    #[error("external dependency names cannot be empty")]
    InvalidExternal,

    #[error("entry path not found: {}", path.display())]
    EntryNotFound { path: PathBuf },

    // Manifest loading
    #[error("package.json not found in {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("invalid package.json at {}: {message}", path.display())]
    InvalidManifest { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
