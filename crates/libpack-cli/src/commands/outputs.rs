//! Outputs command implementation.

use std::io::Write;
use std::path::PathBuf;

use crate::cli::MatrixArgs;
use crate::commands::utils;
use crate::error::Result;

/// Artifact path of every requested combination, format-major.
pub fn artifact_paths(args: &MatrixArgs) -> Result<Vec<PathBuf>> {
    let matrix = utils::resolve_matrix(args)?;
    let package = &matrix.package;

    Ok(matrix
        .formats
        .iter()
        .flat_map(|&format| {
            matrix.environments.iter().map(move |&environment| {
                package
                    .composer
                    .output_file(format, environment, &package.options.package_name)
            })
        })
        .collect())
}

pub fn execute(args: MatrixArgs) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for path in artifact_paths(&args)? {
        writeln!(stdout, "{}", path.display())?;
    }
    Ok(())
}
