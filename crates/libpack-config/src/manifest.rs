//! `package.json` reading for CLI use.
//!
//! Supplies the package name, an entry hint, and the declared dependencies
//! a caller adds to [`BuildOptions::external`](crate::BuildOptions::external).
//! The composer never touches the filesystem itself.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{ConfigError, Result};

pub const MANIFEST_FILE: &str = "package.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub version: Option<String>,

    /// Source entry point, when the package declares one
    #[serde(default)]
    pub source: Option<PathBuf>,

    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    #[serde(default)]
    pub peer_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Parse manifest text. `origin` is only used in error messages.
    pub fn from_json(content: &str, origin: impl AsRef<Path>) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::InvalidManifest {
            path: origin.as_ref().to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `package.json` from a directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ManifestNotFound` if the directory has no manifest.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let path = dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Err(ConfigError::ManifestNotFound(dir.to_path_buf()));
        }

        let content = fs::read_to_string(&path)?;
        let manifest = Self::from_json(&content, &path)?;
        debug!(
            path = %path.display(),
            dependencies = manifest.dependencies.len(),
            peer_dependencies = manifest.peer_dependencies.len(),
            "loaded package manifest"
        );
        Ok(manifest)
    }

    /// Names from `dependencies` and `peerDependencies`, sorted and de-duplicated
    pub fn declared_dependencies(&self) -> BTreeSet<String> {
        self.dependencies
            .keys()
            .chain(self.peer_dependencies.keys())
            .cloned()
            .collect()
    }

    pub fn entry_hint(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
