//! The composed pipeline description handed to the bundling engine.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use crate::stage::{Stage, StageKind, StageList};
use crate::types::ModuleFormat;

/// Tree-shaking policy applied to the whole bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeshakePolicy {
    /// Reading a property may trigger a getter. Always `false`: authored
    /// source must not rely on getters or setters.
    pub property_read_side_effects: bool,
}

impl Default for TreeshakePolicy {
    fn default() -> Self {
        Self {
            property_read_side_effects: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    #[default]
    Named,
}

/// Output artifact description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDescriptor {
    pub file: PathBuf,
    pub format: ModuleFormat,
    pub sourcemap: bool,
    /// `Object.freeze` on namespace import objects
    pub freeze: bool,
    /// Emit the `__esModule` marker for non-ESM formats
    pub es_module: bool,
    pub exports: ExportMode,
    /// Global variable name for the UMD wrapper
    pub name: String,
    pub globals: IndexMap<String, String>,
    pub treeshake: TreeshakePolicy,
}

/// One fully composed pipeline for a single (format, environment) pair.
///
/// Built only by [`ConfigComposer`](crate::ConfigComposer); read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineConfig {
    entry_path: PathBuf,
    external_modules: BTreeSet<String>,
    output: OutputDescriptor,
    stages: StageList,
}

impl PipelineConfig {
    pub(crate) fn new(
        entry_path: PathBuf,
        external_modules: BTreeSet<String>,
        output: OutputDescriptor,
        stages: StageList,
    ) -> Self {
        Self {
            entry_path,
            external_modules,
            output,
            stages,
        }
    }

    pub fn entry_path(&self) -> &Path {
        &self.entry_path
    }

    pub fn external_modules(&self) -> &BTreeSet<String> {
        &self.external_modules
    }

    pub fn output(&self) -> &OutputDescriptor {
        &self.output
    }

    pub fn stages(&self) -> &StageList {
        &self.stages
    }

    pub fn stage(&self, kind: StageKind) -> Option<&Stage> {
        self.stages.get(kind)
    }

    pub fn has_stage(&self, kind: StageKind) -> bool {
        self.stages.contains(kind)
    }

    /// Whether an import specifier is left to the consumer.
    ///
    /// Subpath imports of an externalized package (`react/jsx-runtime`) are
    /// external too.
    pub fn is_external(&self, id: &str) -> bool {
        self.external_modules.iter().any(|module| {
            id == module
                || id
                    .strip_prefix(module.as_str())
                    .is_some_and(|rest| rest.starts_with('/'))
        })
    }
}
