//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use libpack_config::ConfigError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::MissingPackageName(dir) => miette::miette!(
            "No package name for {}\n\nHint: Pass --name or add a \"name\" field to package.json",
            dir.display()
        ),
        _ => miette::miette!("{}", err),
    }
}

fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::EntryNotFound { path } => miette::miette!(
            "Entry point not found: {}\n\nHint: Pass the entry as an argument or set \"source\" in package.json",
            path.display()
        ),
        ConfigError::InvalidGlobalName { name, reason } => miette::miette!(
            "Invalid global name '{}': {}\n\nHint: Use --global-name with a valid JavaScript identifier",
            name,
            reason
        ),
        ConfigError::InvalidManifest { path, message } => miette::miette!(
            "Invalid package.json at {}: {}\n\nHint: Check the file for JSON syntax errors",
            path.display(),
            message
        ),
        other => miette::miette!("{}", other),
    }
}
