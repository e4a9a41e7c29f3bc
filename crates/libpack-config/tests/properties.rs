//! Property-based tests for the composer using proptest.
//!
//! Package names, targets and caller externals are generated; the rules that
//! gate stage presence and naming must hold for all of them.

use libpack_config::{
    is_valid_identifier, safe_package_name, validate_schema, BuildOptions, ConfigComposer,
    Environment, MainField, ModuleFormat, Stage, StageKind, TargetPlatform,
};
use proptest::prelude::*;

fn format_strategy() -> impl Strategy<Value = ModuleFormat> {
    prop::sample::select(ModuleFormat::ALL.to_vec())
}

fn environment_strategy() -> impl Strategy<Value = Environment> {
    prop::sample::select(Environment::ALL.to_vec())
}

fn target_strategy() -> impl Strategy<Value = TargetPlatform> {
    prop::sample::select(TargetPlatform::ALL.to_vec())
}

/// Optionally scoped npm-like names with some noise characters
fn package_name_strategy() -> impl Strategy<Value = String> {
    (
        prop::option::of("[a-z]{1,8}"),
        "[A-Za-z0-9][A-Za-z0-9._ -]{0,15}",
    )
        .prop_map(|(scope, name)| match scope {
            Some(scope) => format!("@{scope}/{name}"),
            None => name,
        })
}

fn options_strategy() -> impl Strategy<Value = BuildOptions> {
    (
        package_name_strategy(),
        target_strategy(),
        prop::collection::btree_set("[a-z][a-z-]{0,10}", 0..5),
    )
        .prop_map(|(name, target, external)| {
            BuildOptions::new("src/index.ts", name)
                .with_target(target)
                .with_external(external)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_stage_presence_follows_rules(
        format in format_strategy(),
        env in environment_strategy(),
        options in options_strategy(),
    ) {
        let config = ConfigComposer::new().compose(format, env, &options);

        prop_assert_eq!(config.has_stage(StageKind::CommonJs), format == ModuleFormat::Umd);
        prop_assert_eq!(config.has_stage(StageKind::Terser), env == Environment::Production);

        for always in [
            StageKind::Resolve,
            StageKind::Json,
            StageKind::TypeScript,
            StageKind::Babel,
            StageKind::Replace,
            StageKind::SourceMaps,
            StageKind::Shebang,
            StageKind::Scss,
        ] {
            prop_assert!(config.has_stage(always), "missing {}", always);
        }
    }

    #[test]
    fn prop_stage_order_strictly_increasing(
        format in format_strategy(),
        env in environment_strategy(),
        options in options_strategy(),
    ) {
        let kinds = ConfigComposer::new().compose(format, env, &options).stages().kinds();
        prop_assert!(kinds.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn prop_browser_field_iff_browser_target(options in options_strategy()) {
        let config = ConfigComposer::new().compose(ModuleFormat::Esm, Environment::Development, &options);
        let Some(Stage::Resolve(resolve)) = config.stage(StageKind::Resolve) else {
            return Err(TestCaseError::fail("resolve stage missing"));
        };
        prop_assert_eq!(
            resolve.main_fields.contains(&MainField::Browser),
            options.target == TargetPlatform::Browser
        );
    }

    #[test]
    fn prop_externals_are_union(
        env in environment_strategy(),
        options in options_strategy(),
    ) {
        let composer = ConfigComposer::new();
        let config = composer.compose(ModuleFormat::CommonJs, env, &options);
        for module in composer.tables().external.iter().chain(options.external.iter()) {
            prop_assert!(config.is_external(module));
        }
        prop_assert_eq!(
            config.external_modules().len(),
            composer.tables().external.union(&options.external).count()
        );
    }

    #[test]
    fn prop_output_file_name_shape(
        format in format_strategy(),
        env in environment_strategy(),
        options in options_strategy(),
    ) {
        let config = ConfigComposer::new().compose(format, env, &options);
        let file_name = config.output().file.file_name().unwrap().to_string_lossy().into_owned();
        prop_assert_eq!(
            file_name,
            format!("{}.{}.{}.js", safe_package_name(&options.package_name), format, env)
        );
    }

    #[test]
    fn prop_sanitized_names_are_file_safe(name in package_name_strategy()) {
        let safe = safe_package_name(&name);
        prop_assert!(safe.chars().all(|c| c.is_ascii_lowercase()
            || c.is_ascii_digit()
            || matches!(c, '_' | '.' | '-')));
        prop_assert!(!safe.contains('/'));
    }

    #[test]
    fn prop_valid_options_get_a_global_identifier(options in options_strategy()) {
        prop_assume!(validate_schema(&options).is_ok());
        let config = ConfigComposer::new().compose(ModuleFormat::Umd, Environment::Production, &options);
        let name = &config.output().name;
        prop_assert!(!name.is_empty(), "empty global for {}", options.package_name);
        prop_assert!(is_valid_identifier(name).is_ok(), "{}", name);
    }
}
