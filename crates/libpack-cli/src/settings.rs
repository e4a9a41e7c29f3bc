//! Layered settings for the libpack CLI.
//!
//! Priority: CLI > `LIBPACK_*` environment > `libpack.toml` > defaults

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    Figment,
};
use libpack_config::{Environment, ModuleFormat, TargetPlatform};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

pub const SETTINGS_FILE: &str = "libpack.toml";
pub const ENV_PREFIX: &str = "LIBPACK_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub dist_dir: PathBuf,

    /// Transpiler cache parent; the OS temp dir when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,

    /// Stylesheet output; `<dist_dir>/styles.css` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<PathBuf>,

    pub target: TargetPlatform,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,

    pub formats: Vec<ModuleFormat>,

    pub environments: Vec<Environment>,

    /// Extra externalized dependencies
    #[serde(default)]
    pub external: Vec<String>,

    /// Extra module id to UMD global mappings
    #[serde(default)]
    pub globals: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from("dist"),
            cache_dir: None,
            stylesheet: None,
            target: TargetPlatform::Browser,
            global_name: None,
            formats: ModuleFormat::ALL.to_vec(),
            environments: Environment::ALL.to_vec(),
            external: Vec::new(),
            globals: BTreeMap::new(),
        }
    }
}

/// Values given on the command line; unset fields don't override lower layers.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SettingsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetPlatform>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,
}

impl Settings {
    /// Load settings for a project directory.
    pub fn load(project_dir: &Path, overrides: &SettingsOverrides) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let file = project_dir.join(SETTINGS_FILE);
        if file.exists() {
            debug!(path = %file.display(), "merging settings file");
            figment = figment.merge(Toml::file(file));
        }

        figment = figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides));

        Ok(figment.extract()?)
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.stylesheet
            .clone()
            .unwrap_or_else(|| self.dist_dir.join("styles.css"))
    }

    pub fn cache_root(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}
