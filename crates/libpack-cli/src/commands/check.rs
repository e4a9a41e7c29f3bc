//! Check command implementation.
//!
//! Validates build inputs without composing anything.

use libpack_config::{FsValidator, OptionsValidator};
use tracing::debug;

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Resolve package name, entry and externals from arguments and package.json
/// 2. Validate the package name and any explicit global name
/// 3. Check the entry point exists
pub fn execute(args: CheckArgs) -> Result<()> {
    let package = utils::resolve_package(&args.package)?;
    debug!(cwd = %package.cwd.display(), "checking build inputs");

    if let Err(err) = FsValidator::new(&package.cwd).validate(&package.options) {
        ui::error("Build inputs are invalid");
        return Err(err.into());
    }

    ui::success(&format!(
        "{} is ready ({} externalized dependencies)",
        package.options.package_name,
        externalized_count(&package)
    ));
    Ok(())
}

/// Distinct modules left unbundled: fixed externals plus the package's own.
fn externalized_count(package: &utils::ResolvedPackage) -> usize {
    package
        .options
        .external
        .union(&package.composer.tables().external)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PackageArgs;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_shared_externals_counted_once() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{ "name": "widgets", "peerDependencies": { "react": "^18", "vue": "^3" } }"#,
        )
        .unwrap();

        let package = utils::resolve_package(&PackageArgs {
            cwd: Some(dir.path().to_path_buf()),
            ..PackageArgs::default()
        })
        .unwrap();

        // react, react-native, vue
        assert_eq!(externalized_count(&package), 3);
    }
}
