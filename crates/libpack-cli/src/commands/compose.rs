//! Compose command implementation.
//!
//! Prints a JSON array with one pipeline config per requested combination.

use std::io::Write;

use tracing::info;

use crate::cli::ComposeArgs;
use crate::commands::utils;
use crate::error::Result;

/// Render the pipeline configs for `args` as JSON.
pub fn render(args: &ComposeArgs) -> Result<String> {
    let matrix = utils::resolve_matrix(&args.matrix)?;
    let package = &matrix.package;

    let configs =
        package
            .composer
            .compose_matrix(&matrix.formats, &matrix.environments, &package.options);

    info!(
        package = %package.options.package_name,
        pipelines = configs.len(),
        "composed pipelines"
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&configs)?
    } else {
        serde_json::to_string(&configs)?
    };
    Ok(json)
}

pub fn execute(args: ComposeArgs) -> Result<()> {
    let json = render(&args)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}
