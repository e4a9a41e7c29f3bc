use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::tables::ImportReplacement;

/// Package manifest fields consulted during module resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MainField {
    Module,
    Main,
    Browser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOptions {
    /// Fields tried in order
    pub main_fields: Vec<MainField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonJsOptions {
    /// Path pattern of modules converted to ES modules.
    ///
    /// Matches any `node_modules` segment so hoisted and transitive
    /// dependencies are converted too.
    pub include: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonOptions {}

/// TypeScript compiler options forwarded to the type-stripping stage.
///
/// Unset fields are left to the project's `tsconfig.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_map: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declaration: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsx: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl CompilerOptions {
    /// Defaults applied beneath the project's tsconfig
    pub fn library_defaults() -> Self {
        Self {
            source_map: Some(true),
            declaration: Some(true),
            jsx: Some("react".to_string()),
            target: None,
        }
    }

    /// Forced on top of the project's tsconfig; syntax lowering happens later
    pub fn esnext_override() -> Self {
        Self {
            target: Some("esnext".to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeScriptOptions {
    pub cache_root: PathBuf,
    pub tsconfig_defaults: CompilerOptions,
    pub tsconfig_override: CompilerOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "kebab-case")]
pub enum BabelPlugin {
    /// Mark call expressions `/*#__PURE__*/` for dead-code elimination
    AnnotatePureCalls,
    /// Strip development-only expressions such as `__DEV__` guards
    DevExpression,
    TransformRenameImport {
        replacements: Vec<ImportReplacement>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BabelOptions {
    /// Path pattern left untransformed
    pub exclude: String,
    pub extensions: Vec<String>,
    pub plugins: Vec<BabelPlugin>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceOptions {
    /// Expression to replacement source text
    pub values: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMapsOptions {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressOptions {
    /// Keep `Infinity` instead of rewriting it to `1/0`
    pub keep_infinity: bool,
    /// Property reads have no side effects (no getters)
    pub pure_getters: bool,
    pub collapse_vars: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerserOptions {
    pub sourcemap: bool,
    /// Preserve comments in output
    pub comments: bool,
    pub compress: CompressOptions,
    pub ecma: u16,
    /// Mangle and drop unused names in the top-level scope
    pub toplevel: bool,
    pub warnings: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShebangOptions {
    /// Interpreter directive to insert. `None` restores the one found on the entry.
    #[serde(default)]
    pub shebang: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScssOptions {
    pub output: PathBuf,
}
