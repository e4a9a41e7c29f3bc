//! Resolution of CLI arguments, settings and the package manifest into
//! composer inputs.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use libpack_config::{
    validate_schema, BuildOptions, ComposerPaths, ComposerTables, ConfigComposer, ConfigError,
    Environment, ModuleFormat, PackageManifest,
};
use tracing::debug;

use crate::cli::{MatrixArgs, PackageArgs};
use crate::error::{CliError, Result};
use crate::settings::{Settings, SettingsOverrides};

pub(crate) const DEFAULT_ENTRY: &str = "src/index.ts";

/// Everything a command needs to compose pipelines for one package
#[derive(Debug)]
pub struct ResolvedPackage {
    pub cwd: PathBuf,
    pub options: BuildOptions,
    pub composer: ConfigComposer,
    pub settings: Settings,
}

/// A resolved package plus the combinations to compose
#[derive(Debug)]
pub struct ResolvedMatrix {
    pub package: ResolvedPackage,
    pub formats: Vec<ModuleFormat>,
    pub environments: Vec<Environment>,
}

pub fn get_cwd() -> Result<PathBuf> {
    std::env::current_dir().map_err(CliError::from)
}

/// Resolve a path relative to `base` unless it is already absolute.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

pub fn resolve_package(args: &PackageArgs) -> Result<ResolvedPackage> {
    let cwd = match &args.cwd {
        Some(dir) => resolve_path(dir, &get_cwd()?),
        None => get_cwd()?,
    };

    let overrides = SettingsOverrides {
        dist_dir: args.dist_dir.clone(),
        cache_dir: args.cache_dir.clone(),
        stylesheet: args.stylesheet.clone(),
        target: args.target.map(Into::into),
        global_name: args.global_name.clone(),
    };
    let settings = Settings::load(&cwd, &overrides)?;

    let manifest = match PackageManifest::load(&cwd) {
        Ok(manifest) => Some(manifest),
        Err(ConfigError::ManifestNotFound(dir)) => {
            debug!(dir = %dir.display(), "no package.json; relying on arguments");
            None
        }
        Err(err) => return Err(err.into()),
    };

    let package_name = args
        .name
        .clone()
        .or_else(|| manifest.as_ref().and_then(|m| m.name.clone()))
        .ok_or_else(|| CliError::MissingPackageName(cwd.clone()))?;

    let entry = args
        .entry
        .clone()
        .or_else(|| {
            manifest
                .as_ref()
                .and_then(|m| m.entry_hint().map(Path::to_path_buf))
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENTRY));

    let mut external: BTreeSet<String> = manifest
        .as_ref()
        .map(PackageManifest::declared_dependencies)
        .unwrap_or_default();
    external.extend(settings.external.iter().cloned());
    external.extend(args.external.iter().cloned());

    let mut options = BuildOptions::new(entry, package_name)
        .with_target(settings.target)
        .with_external(external);
    if let Some(name) = &settings.global_name {
        options = options.with_global_name(name.clone());
    }

    let mut tables = ComposerTables::default();
    for (module, global) in &settings.globals {
        tables = tables.with_global(module.clone(), global.clone());
    }

    let paths = ComposerPaths::default()
        .with_dist_dir(settings.dist_dir.clone())
        .with_cache_root(settings.cache_root())
        .with_stylesheet(settings.stylesheet_path());

    let composer = ConfigComposer::new().with_tables(tables).with_paths(paths);

    debug!(
        package = %options.package_name,
        entry = %options.entry_path.display(),
        external = options.external.len(),
        "resolved package"
    );

    Ok(ResolvedPackage {
        cwd,
        options,
        composer,
        settings,
    })
}

pub fn resolve_matrix(args: &MatrixArgs) -> Result<ResolvedMatrix> {
    let package = resolve_package(&args.package)?;

    let formats = if args.formats.is_empty() {
        package.settings.formats.clone()
    } else {
        args.formats.iter().copied().map(Into::into).collect()
    };

    let environments = if args.environments.is_empty() {
        package.settings.environments.clone()
    } else {
        args.environments.iter().copied().map(Into::into).collect()
    };

    if formats.is_empty() || environments.is_empty() {
        return Err(CliError::InvalidArgument(
            "at least one format and one environment are required".to_string(),
        ));
    }

    validate_schema(&package.options)?;

    Ok(ResolvedMatrix {
        package,
        formats,
        environments,
    })
}
