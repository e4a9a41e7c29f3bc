//! Bundling pipeline composition for single-entry library packages.
//!
//! Given an output [`ModuleFormat`], an [`Environment`] and [`BuildOptions`],
//! [`ConfigComposer`] produces a [`PipelineConfig`]: the entry point, the
//! externalized dependencies, the output descriptor and the ordered stage list
//! an external bundling engine executes.

pub mod composer;
pub mod error;
pub mod manifest;
pub mod naming;
pub mod options;
pub mod pipeline;
pub mod stage;
pub mod tables;
pub mod types;
pub mod validation;

// Re-export main types
pub use composer::{compose, ConfigComposer, NODE_ENV_MARKER};
pub use error::*;
pub use manifest::PackageManifest;
pub use naming::{is_valid_identifier, safe_package_name, safe_variable_name};
pub use options::{BuildOptions, ComposerPaths};
pub use pipeline::{ExportMode, OutputDescriptor, PipelineConfig, TreeshakePolicy};
pub use stage::*;
pub use tables::{ComposerTables, ImportReplacement, DEFAULT_EXTENSIONS};
pub use types::{Environment, ModuleFormat, TargetPlatform};

pub use validation::{
    validate_fs, validate_schema, FsValidator, OptionsValidator, SchemaValidator,
};
