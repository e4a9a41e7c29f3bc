use clap::ValueEnum;
use libpack_config::{Environment, ModuleFormat, TargetPlatform};

/// Output module format
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Format {
    /// CommonJS modules (require/module.exports)
    #[value(name = "cjs", alias = "commonjs")]
    Cjs,

    /// Universal module definition
    ///
    /// Loadable through a script tag as a global or through module loaders.
    /// CommonJS dependencies are converted so the bundle works standalone.
    #[value(name = "umd")]
    Umd,

    /// ECMAScript modules (import/export syntax)
    #[value(name = "es", alias = "esm")]
    Es,
}

/// Build environment
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Env {
    /// Unminified, keeps development-only branches reachable
    #[value(name = "development", alias = "dev")]
    Development,

    /// Minified with development-only code removed
    #[value(name = "production", alias = "prod")]
    Production,
}

/// Target platform
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum Target {
    /// Browser environment; honours the package.json "browser" field
    #[value(name = "browser")]
    Browser,

    /// Node.js environment
    #[value(name = "node")]
    Node,
}

impl From<Format> for ModuleFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Cjs => ModuleFormat::CommonJs,
            Format::Umd => ModuleFormat::Umd,
            Format::Es => ModuleFormat::Esm,
        }
    }
}

impl From<Env> for Environment {
    fn from(e: Env) -> Self {
        match e {
            Env::Development => Environment::Development,
            Env::Production => Environment::Production,
        }
    }
}

impl From<Target> for TargetPlatform {
    fn from(t: Target) -> Self {
        match t {
            Target::Browser => TargetPlatform::Browser,
            Target::Node => TargetPlatform::Node,
        }
    }
}
