use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Output module format.
///
/// Serialized with the identifiers the bundling engine understands, which are
/// also the tokens used in artifact file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModuleFormat {
    /// CommonJS (`require`/`module.exports`)
    #[serde(rename = "cjs")]
    CommonJs,
    /// Universal module definition, loadable as a script global or via loaders
    #[serde(rename = "umd")]
    Umd,
    /// ECMAScript modules
    #[serde(rename = "es")]
    Esm,
}

impl ModuleFormat {
    pub const ALL: [ModuleFormat; 3] = [ModuleFormat::CommonJs, ModuleFormat::Umd, ModuleFormat::Esm];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleFormat::CommonJs => "cjs",
            ModuleFormat::Umd => "umd",
            ModuleFormat::Esm => "es",
        }
    }

    /// Whether the minifier may treat the bundle's top-level scope as private.
    ///
    /// A UMD build exposes its wrapper to consumers through the global name,
    /// so only `es` and `cjs` qualify.
    pub fn allows_toplevel_mangling(&self) -> bool {
        matches!(self, ModuleFormat::Esm | ModuleFormat::CommonJs)
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cjs" | "commonjs" => Ok(ModuleFormat::CommonJs),
            "umd" | "universal-module" => Ok(ModuleFormat::Umd),
            "es" | "esm" | "ecmascript-module" => Ok(ModuleFormat::Esm),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

/// Build environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 2] = [Environment::Development, Environment::Production];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::UnknownEnvironment(s.to_string())),
        }
    }
}

/// Platform the bundle is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetPlatform {
    Node,
    /// Browser environment (default)
    #[default]
    Browser,
}

impl TargetPlatform {
    pub const ALL: [TargetPlatform; 2] = [TargetPlatform::Node, TargetPlatform::Browser];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetPlatform::Node => "node",
            TargetPlatform::Browser => "browser",
        }
    }
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetPlatform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "node" => Ok(TargetPlatform::Node),
            "browser" => Ok(TargetPlatform::Browser),
            _ => Err(ConfigError::UnknownTarget(s.to_string())),
        }
    }
}
