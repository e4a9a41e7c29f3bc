//! Pluggable pre-flight validation for build options
//!
//! Callers run these before composing. Schema checks need no filesystem;
//! [`FsValidator`] additionally confirms the entry file exists.

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::naming::{is_valid_identifier, safe_package_name};
use crate::options::BuildOptions;

pub trait OptionsValidator {
    fn validate(&self, options: &BuildOptions) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use libpack_config::{BuildOptions, OptionsValidator, SchemaValidator};
///
/// let options = BuildOptions::new("src/index.ts", "my-lib");
/// SchemaValidator.validate(&options).unwrap();
/// ```
pub struct SchemaValidator;

impl OptionsValidator for SchemaValidator {
    fn validate(&self, options: &BuildOptions) -> Result<()> {
        if options.package_name.trim().is_empty()
            || safe_package_name(&options.package_name).is_empty()
        {
            return Err(ConfigError::EmptyPackageName {
                name: options.package_name.clone(),
            });
        }

        if let Some(name) = &options.global_name {
            is_valid_identifier(name).map_err(|reason| ConfigError::InvalidGlobalName {
                name: name.clone(),
                reason,
            })?;
        }

        if options.external.iter().any(|module| module.trim().is_empty()) {
            return Err(ConfigError::InvalidExternal);
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// ```no_run
/// use libpack_config::{BuildOptions, FsValidator, OptionsValidator};
///
/// let options = BuildOptions::new("src/index.ts", "my-lib");
/// FsValidator::new(".").validate(&options).unwrap();
/// ```
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl OptionsValidator for FsValidator {
    fn validate(&self, options: &BuildOptions) -> Result<()> {
        SchemaValidator.validate(options)?;

        let path = self.root.join(&options.entry_path);
        if !path.is_file() {
            return Err(ConfigError::EntryNotFound { path });
        }

        Ok(())
    }
}

pub fn validate_schema(options: &BuildOptions) -> Result<()> {
    SchemaValidator.validate(options)
}

pub fn validate_fs(options: &BuildOptions, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(options)
}
