use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::TargetPlatform;

/// Caller-supplied inputs for one package
///
/// # Example
///
/// ```
/// use libpack_config::{BuildOptions, TargetPlatform};
///
/// let options = BuildOptions::new("src/index.ts", "@acme/widgets")
///     .with_target(TargetPlatform::Node)
///     .with_external(["lodash"]);
///
/// assert_eq!(options.target, TargetPlatform::Node);
/// assert!(options.external.contains("lodash"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    /// Entry source file; existence is checked by the caller
    pub entry_path: PathBuf,

    pub package_name: String,

    #[serde(default)]
    pub target: TargetPlatform,

    /// Explicit UMD global name. Derived from the package name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,

    /// Additional externalized dependencies, usually the package's declared dependencies
    #[serde(default)]
    pub external: BTreeSet<String>,
}

impl BuildOptions {
    pub fn new(entry_path: impl Into<PathBuf>, package_name: impl Into<String>) -> Self {
        Self {
            entry_path: entry_path.into(),
            package_name: package_name.into(),
            target: TargetPlatform::default(),
            global_name: None,
            external: BTreeSet::new(),
        }
    }

    pub fn with_target(mut self, target: TargetPlatform) -> Self {
        self.target = target;
        self
    }

    pub fn with_global_name(mut self, name: impl Into<String>) -> Self {
        self.global_name = Some(name.into());
        self
    }

    pub fn with_external<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.external.extend(modules.into_iter().map(Into::into));
        self
    }
}

/// Directories the composer writes into the pipeline description.
///
/// The composer never looks these up on the host; the caller decides them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposerPaths {
    pub dist_dir: PathBuf,

    /// Parent directory for per-format transpiler caches
    pub cache_root: PathBuf,

    /// Extracted stylesheet output
    pub stylesheet: PathBuf,
}

impl ComposerPaths {
    pub fn with_dist_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dist_dir = dir.into();
        self
    }

    pub fn with_cache_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_root = dir.into();
        self
    }

    pub fn with_stylesheet(mut self, path: impl Into<PathBuf>) -> Self {
        self.stylesheet = path.into();
        self
    }
}

impl Default for ComposerPaths {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from("dist"),
            cache_root: PathBuf::from("node_modules/.cache/libpack"),
            stylesheet: PathBuf::from("dist/styles.css"),
        }
    }
}
