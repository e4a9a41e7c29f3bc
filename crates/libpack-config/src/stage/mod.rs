//! Pipeline stage descriptors.
//!
//! A [`Stage`] names one unit of the external bundling pipeline together with
//! its options. [`StageKind`] declaration order is the pipeline order; every
//! [`StageList`] respects it.

mod list;
mod options;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use list::{StageList, StageListBuilder};
pub use options::{
    BabelOptions, BabelPlugin, CommonJsOptions, CompilerOptions, CompressOptions, JsonOptions,
    MainField, ReplaceOptions, ResolveOptions, ScssOptions, ShebangOptions, SourceMapsOptions,
    TerserOptions, TypeScriptOptions,
};

/// Stage names in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    /// Module resolution
    Resolve,
    /// CommonJS to ES module interop
    CommonJs,
    Json,
    /// Type stripping
    TypeScript,
    /// Syntax lowering
    Babel,
    /// Environment-variable substitution
    Replace,
    /// Source-map re-emission
    SourceMaps,
    /// Minification
    Terser,
    /// Interpreter directive restoration
    Shebang,
    /// Stylesheet extraction
    Scss,
}

impl StageKind {
    pub const ALL: [StageKind; 10] = [
        StageKind::Resolve,
        StageKind::CommonJs,
        StageKind::Json,
        StageKind::TypeScript,
        StageKind::Babel,
        StageKind::Replace,
        StageKind::SourceMaps,
        StageKind::Terser,
        StageKind::Shebang,
        StageKind::Scss,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StageKind::Resolve => "resolve",
            StageKind::CommonJs => "commonjs",
            StageKind::Json => "json",
            StageKind::TypeScript => "typescript",
            StageKind::Babel => "babel",
            StageKind::Replace => "replace",
            StageKind::SourceMaps => "sourcemaps",
            StageKind::Terser => "terser",
            StageKind::Shebang => "shebang",
            StageKind::Scss => "scss",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configured pipeline stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", content = "options", rename_all = "lowercase")]
pub enum Stage {
    Resolve(ResolveOptions),
    CommonJs(CommonJsOptions),
    Json(JsonOptions),
    TypeScript(TypeScriptOptions),
    Babel(BabelOptions),
    Replace(ReplaceOptions),
    SourceMaps(SourceMapsOptions),
    Terser(TerserOptions),
    Shebang(ShebangOptions),
    Scss(ScssOptions),
}

impl Stage {
    pub fn kind(&self) -> StageKind {
        match self {
            Stage::Resolve(_) => StageKind::Resolve,
            Stage::CommonJs(_) => StageKind::CommonJs,
            Stage::Json(_) => StageKind::Json,
            Stage::TypeScript(_) => StageKind::TypeScript,
            Stage::Babel(_) => StageKind::Babel,
            Stage::Replace(_) => StageKind::Replace,
            Stage::SourceMaps(_) => StageKind::SourceMaps,
            Stage::Terser(_) => StageKind::Terser,
            Stage::Shebang(_) => StageKind::Shebang,
            Stage::Scss(_) => StageKind::Scss,
        }
    }
}
