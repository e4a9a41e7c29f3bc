//! Pipeline composition.
//!
//! [`ConfigComposer::compose`] is a pure function of its inputs: it reads no
//! files and consults nothing on the host. Every directory it writes into the
//! result comes from [`ComposerPaths`].

use std::path::PathBuf;

use indexmap::IndexMap;
use tracing::debug;

use crate::naming::{safe_package_name, safe_variable_name};
use crate::options::{BuildOptions, ComposerPaths};
use crate::pipeline::{ExportMode, OutputDescriptor, PipelineConfig, TreeshakePolicy};
use crate::stage::{
    BabelOptions, BabelPlugin, CommonJsOptions, CompilerOptions, CompressOptions, JsonOptions,
    MainField, ReplaceOptions, ResolveOptions, ScssOptions, ShebangOptions, SourceMapsOptions,
    Stage, StageList, TerserOptions, TypeScriptOptions,
};
use crate::tables::ComposerTables;
use crate::types::{Environment, ModuleFormat, TargetPlatform};

/// Expression replaced with the literal build environment
pub const NODE_ENV_MARKER: &str = "process.env.NODE_ENV";

/// Matches any `node_modules` path segment, including hoisted trees
const NODE_MODULES_SEGMENT: &str = "/node_modules/";

const NODE_MODULES: &str = "node_modules";

/// Composes [`PipelineConfig`]s from build parameters.
///
/// # Example
///
/// ```
/// use libpack_config::{BuildOptions, ConfigComposer, Environment, ModuleFormat, StageKind};
///
/// let composer = ConfigComposer::new();
/// let options = BuildOptions::new("src/index.ts", "@scope/My-Pkg");
/// let config = composer.compose(ModuleFormat::CommonJs, Environment::Production, &options);
///
/// assert_eq!(
///     config.output().file,
///     std::path::Path::new("dist/my-pkg.cjs.production.js")
/// );
/// assert!(config.has_stage(StageKind::Terser));
/// assert!(!config.has_stage(StageKind::CommonJs));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigComposer {
    tables: ComposerTables,
    paths: ComposerPaths,
}

impl ConfigComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tables(mut self, tables: ComposerTables) -> Self {
        self.tables = tables;
        self
    }

    pub fn with_paths(mut self, paths: ComposerPaths) -> Self {
        self.paths = paths;
        self
    }

    pub fn tables(&self) -> &ComposerTables {
        &self.tables
    }

    pub fn paths(&self) -> &ComposerPaths {
        &self.paths
    }

    /// `{dist_dir}/{safe_package_name}.{format}.{environment}.js`
    pub fn output_file(
        &self,
        format: ModuleFormat,
        environment: Environment,
        package_name: &str,
    ) -> PathBuf {
        self.paths.dist_dir.join(format!(
            "{}.{}.{}.js",
            safe_package_name(package_name),
            format,
            environment
        ))
    }

    pub fn compose(
        &self,
        format: ModuleFormat,
        environment: Environment,
        options: &BuildOptions,
    ) -> PipelineConfig {
        let mut external_modules = self.tables.external.clone();
        external_modules.extend(options.external.iter().cloned());

        let output = OutputDescriptor {
            file: self.output_file(format, environment, &options.package_name),
            format,
            sourcemap: true,
            freeze: false,
            es_module: false,
            exports: ExportMode::Named,
            name: options
                .global_name
                .clone()
                .unwrap_or_else(|| safe_variable_name(&options.package_name)),
            globals: self.tables.globals.clone(),
            treeshake: TreeshakePolicy::default(),
        };

        let stages = StageList::builder()
            .always(resolve_stage(options.target))
            .when(format == ModuleFormat::Umd, || {
                Stage::CommonJs(CommonJsOptions {
                    include: NODE_MODULES_SEGMENT.to_string(),
                })
            })
            .always(Stage::Json(JsonOptions::default()))
            .always(Stage::TypeScript(TypeScriptOptions {
                cache_root: self
                    .paths
                    .cache_root
                    .join(format!(".rts2_cache_{format}")),
                tsconfig_defaults: CompilerOptions::library_defaults(),
                tsconfig_override: CompilerOptions::esnext_override(),
            }))
            .always(self.babel_stage())
            .always(replace_stage(environment))
            .always(Stage::SourceMaps(SourceMapsOptions::default()))
            .when(environment.is_production(), || terser_stage(format))
            .always(Stage::Shebang(ShebangOptions::default()))
            .always(Stage::Scss(ScssOptions {
                output: self.paths.stylesheet.clone(),
            }))
            .build();

        debug!(
            %format,
            %environment,
            target = %options.target,
            file = %output.file.display(),
            stages = stages.len(),
            "composed pipeline"
        );

        PipelineConfig::new(
            options.entry_path.clone(),
            external_modules,
            output,
            stages,
        )
    }

    /// Compose every combination, format-major in input order.
    pub fn compose_matrix(
        &self,
        formats: &[ModuleFormat],
        environments: &[Environment],
        options: &BuildOptions,
    ) -> Vec<PipelineConfig> {
        formats
            .iter()
            .flat_map(|&format| {
                environments
                    .iter()
                    .map(move |&environment| self.compose(format, environment, options))
            })
            .collect()
    }

    fn babel_stage(&self) -> Stage {
        Stage::Babel(BabelOptions {
            exclude: NODE_MODULES.to_string(),
            extensions: self.tables.extensions.clone(),
            plugins: vec![
                BabelPlugin::AnnotatePureCalls,
                BabelPlugin::DevExpression,
                BabelPlugin::TransformRenameImport {
                    replacements: self.tables.import_replacements.clone(),
                },
            ],
        })
    }
}

/// Compose with the default tables and paths.
pub fn compose(
    format: ModuleFormat,
    environment: Environment,
    options: &BuildOptions,
) -> PipelineConfig {
    ConfigComposer::default().compose(format, environment, options)
}

fn resolve_stage(target: TargetPlatform) -> Stage {
    let mut main_fields = vec![MainField::Module, MainField::Main];
    if target == TargetPlatform::Browser {
        main_fields.push(MainField::Browser);
    }
    Stage::Resolve(ResolveOptions { main_fields })
}

fn replace_stage(environment: Environment) -> Stage {
    let mut values = IndexMap::new();
    // JSON-quoted so the replacement is a string literal in the output
    values.insert(
        NODE_ENV_MARKER.to_string(),
        format!("\"{}\"", environment.as_str()),
    );
    Stage::Replace(ReplaceOptions { values })
}

fn terser_stage(format: ModuleFormat) -> Stage {
    Stage::Terser(TerserOptions {
        sourcemap: true,
        comments: false,
        compress: CompressOptions {
            keep_infinity: true,
            pure_getters: true,
            collapse_vars: false,
        },
        ecma: 5,
        toplevel: format.allows_toplevel_mangling(),
        warnings: true,
    })
}
