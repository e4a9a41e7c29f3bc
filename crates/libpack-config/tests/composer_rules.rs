//! Derivation rules checked across every (format, environment) combination.

use std::path::{Path, PathBuf};

use libpack_config::{
    BabelPlugin, BuildOptions, ComposerPaths, ComposerTables, ConfigComposer, Environment,
    ImportReplacement, MainField, ModuleFormat, PipelineConfig, Stage, StageKind, TargetPlatform,
};

fn options() -> BuildOptions {
    BuildOptions::new("src/index.ts", "@scope/My-Pkg")
}

fn all_configs(options: &BuildOptions) -> Vec<PipelineConfig> {
    ConfigComposer::new().compose_matrix(&ModuleFormat::ALL, &Environment::ALL, options)
}

#[test]
fn six_combinations_are_composed() {
    assert_eq!(all_configs(&options()).len(), 6);
}

#[test]
fn compose_is_deterministic() {
    let composer = ConfigComposer::new();
    for format in ModuleFormat::ALL {
        for env in Environment::ALL {
            assert_eq!(
                composer.compose(format, env, &options()),
                composer.compose(format, env, &options())
            );
        }
    }
}

#[test]
fn commonjs_interop_only_for_umd() {
    for config in all_configs(&options()) {
        assert_eq!(
            config.has_stage(StageKind::CommonJs),
            config.output().format == ModuleFormat::Umd,
            "{}",
            config.output().file.display()
        );
    }
}

#[test]
fn commonjs_interop_reaches_nested_node_modules() {
    let config = ConfigComposer::new().compose(ModuleFormat::Umd, Environment::Development, &options());
    let Some(Stage::CommonJs(cjs)) = config.stage(StageKind::CommonJs) else {
        panic!("commonjs stage missing");
    };
    assert_eq!(cjs.include, "/node_modules/");
}

#[test]
fn minification_only_in_production() {
    let composer = ConfigComposer::new();
    for format in ModuleFormat::ALL {
        assert!(!composer
            .compose(format, Environment::Development, &options())
            .has_stage(StageKind::Terser));
        assert!(composer
            .compose(format, Environment::Production, &options())
            .has_stage(StageKind::Terser));
    }
}

#[test]
fn toplevel_mangling_except_umd() {
    let composer = ConfigComposer::new();
    for format in ModuleFormat::ALL {
        let config = composer.compose(format, Environment::Production, &options());
        let Some(Stage::Terser(terser)) = config.stage(StageKind::Terser) else {
            panic!("terser stage missing for {format}");
        };
        assert_eq!(
            terser.toplevel,
            matches!(format, ModuleFormat::Esm | ModuleFormat::CommonJs)
        );
        assert!(terser.compress.keep_infinity);
        assert!(terser.compress.pure_getters);
        assert!(!terser.compress.collapse_vars);
        assert!(!terser.comments);
        assert_eq!(terser.ecma, 5);
    }
}

#[test]
fn browser_field_only_for_browser_target() {
    let composer = ConfigComposer::new();
    for target in TargetPlatform::ALL {
        let config = composer.compose(
            ModuleFormat::Esm,
            Environment::Development,
            &options().with_target(target),
        );
        let Some(Stage::Resolve(resolve)) = config.stage(StageKind::Resolve) else {
            panic!("resolve stage missing");
        };
        let expected = match target {
            TargetPlatform::Browser => vec![MainField::Module, MainField::Main, MainField::Browser],
            TargetPlatform::Node => vec![MainField::Module, MainField::Main],
        };
        assert_eq!(resolve.main_fields, expected);
    }
}

#[test]
fn output_path_follows_naming_scheme() {
    let composer = ConfigComposer::new();
    let config = composer.compose(ModuleFormat::CommonJs, Environment::Production, &options());
    assert_eq!(config.output().file, PathBuf::from("dist/my-pkg.cjs.production.js"));

    for config in all_configs(&options()) {
        let expected = format!(
            "dist/my-pkg.{}.{}.js",
            config.output().format,
            if config.has_stage(StageKind::Terser) { "production" } else { "development" }
        );
        assert_eq!(config.output().file, PathBuf::from(expected));
    }
}

#[test]
fn custom_dist_dir_is_used() {
    let composer = ConfigComposer::new().with_paths(ComposerPaths::default().with_dist_dir("build/lib"));
    let config = composer.compose(ModuleFormat::Esm, Environment::Development, &options());
    assert_eq!(config.output().file, Path::new("build/lib/my-pkg.es.development.js"));
}

#[test]
fn stage_order_is_invariant() {
    for config in all_configs(&options()) {
        let kinds = config.stages().kinds();
        assert!(kinds.windows(2).all(|pair| pair[0] < pair[1]), "{kinds:?}");
        assert_eq!(kinds.first(), Some(&StageKind::Resolve));
        assert_eq!(kinds.last(), Some(&StageKind::Scss));
    }
}

#[test]
fn shebang_follows_minification() {
    let config = ConfigComposer::new().compose(ModuleFormat::Esm, Environment::Production, &options());
    let kinds = config.stages().kinds();
    let terser = kinds.iter().position(|k| *k == StageKind::Terser).unwrap();
    let shebang = kinds.iter().position(|k| *k == StageKind::Shebang).unwrap();
    assert_eq!(shebang, terser + 1);
    assert_eq!(shebang, kinds.len() - 2);
}

#[test]
fn fixed_externals_always_present() {
    let tables = ComposerTables::default();
    for config in all_configs(&options()) {
        for module in &tables.external {
            assert!(config.external_modules().contains(module));
            assert!(config.is_external(module));
        }
    }
}

#[test]
fn caller_externals_are_merged() {
    let opts = options().with_external(["lodash", "react"]);
    let config = ConfigComposer::new().compose(ModuleFormat::Esm, Environment::Production, &opts);
    let externals: Vec<_> = config.external_modules().iter().map(String::as_str).collect();
    assert_eq!(externals, vec!["lodash", "react", "react-native"]);
}

#[test]
fn subpath_imports_are_external() {
    let config = ConfigComposer::new().compose(ModuleFormat::Esm, Environment::Production, &options());
    assert!(config.is_external("react/jsx-runtime"));
    assert!(!config.is_external("react-dom"));
    assert!(!config.is_external("./local"));
}

#[test]
fn environment_substitution_is_quoted_literal() {
    for config in all_configs(&options()) {
        let Some(Stage::Replace(replace)) = config.stage(StageKind::Replace) else {
            panic!("replace stage missing");
        };
        let value = replace.values.get("process.env.NODE_ENV").unwrap();
        let expected = if config.has_stage(StageKind::Terser) {
            "\"production\""
        } else {
            "\"development\""
        };
        assert_eq!(value, expected);
        assert_eq!(replace.values.len(), 1);
    }
}

#[test]
fn syntax_lowering_carries_plugins_and_replacements() {
    let tables = ComposerTables::default().with_replacement(ImportReplacement::new("moment", "dayjs"));
    let config = ConfigComposer::new()
        .with_tables(tables)
        .compose(ModuleFormat::CommonJs, Environment::Development, &options());
    let Some(Stage::Babel(babel)) = config.stage(StageKind::Babel) else {
        panic!("babel stage missing");
    };
    assert_eq!(babel.exclude, "node_modules");
    assert!(babel.extensions.iter().any(|ext| ext == ".tsx"));
    assert_eq!(babel.plugins[0], BabelPlugin::AnnotatePureCalls);
    assert_eq!(babel.plugins[1], BabelPlugin::DevExpression);
    assert_eq!(
        babel.plugins[2],
        BabelPlugin::TransformRenameImport {
            replacements: vec![
                ImportReplacement::new("lodash", "lodash-es"),
                ImportReplacement::new("moment", "dayjs"),
            ],
        }
    );
}

#[test]
fn output_flags_are_fixed() {
    for config in all_configs(&options()) {
        let output = config.output();
        assert!(output.sourcemap);
        assert!(!output.freeze);
        assert!(!output.es_module);
        assert!(!output.treeshake.property_read_side_effects);
        assert_eq!(output.globals.get("react").map(String::as_str), Some("React"));
    }
}

#[test]
fn stylesheet_output_is_independent_of_build() {
    let composer =
        ConfigComposer::new().with_paths(ComposerPaths::default().with_stylesheet("dist/lib.css"));
    for config in composer.compose_matrix(&ModuleFormat::ALL, &Environment::ALL, &options()) {
        let Some(Stage::Scss(scss)) = config.stage(StageKind::Scss) else {
            panic!("scss stage missing");
        };
        assert_eq!(scss.output, PathBuf::from("dist/lib.css"));
    }
}

#[test]
fn pipeline_serializes_for_engine() {
    let config = ConfigComposer::new().compose(ModuleFormat::Umd, Environment::Production, &options());
    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(value["entryPath"], "src/index.ts");
    assert_eq!(value["output"]["format"], "umd");
    assert_eq!(value["output"]["esModule"], false);
    assert_eq!(value["output"]["name"], "scopemyPkg");
    assert_eq!(value["output"]["treeshake"]["propertyReadSideEffects"], false);
    assert_eq!(value["stages"][0]["stage"], "resolve");
    assert_eq!(value["stages"][1]["stage"], "commonjs");
    assert_eq!(value["stages"][7]["options"]["compress"]["keep_infinity"], true);
}

#[test]
fn concurrent_composition_matches_sequential() {
    let composer = ConfigComposer::new();
    let opts = options();
    let sequential = all_configs(&opts);

    let concurrent: Vec<PipelineConfig> = std::thread::scope(|scope| {
        let handles: Vec<_> = ModuleFormat::ALL
            .iter()
            .flat_map(|&format| Environment::ALL.iter().map(move |&env| (format, env)))
            .map(|(format, env)| {
                let composer = &composer;
                let opts = &opts;
                scope.spawn(move || composer.compose(format, env, opts))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(concurrent, sequential);
}
