use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;
use crate::cli::validation::parse_global;

/// Available libpack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose pipeline configs and print them as JSON
    ///
    /// Emits one config per requested (format, environment) combination,
    /// in format-major order.
    Compose(ComposeArgs),

    /// Print the artifact path of every requested combination
    Outputs(MatrixArgs),

    /// Validate the package name, global name and entry point
    Check(CheckArgs),
}

/// Package inputs shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct PackageArgs {
    /// Entry point (defaults to package.json "source", then src/index.ts)
    #[arg(value_name = "ENTRY")]
    pub entry: Option<PathBuf>,

    /// Package name (defaults to package.json "name")
    #[arg(long)]
    pub name: Option<String>,

    /// Target platform
    #[arg(long, value_enum)]
    pub target: Option<Target>,

    /// Global variable name for UMD bundles (must be valid JS identifier)
    #[arg(long, value_parser = parse_global)]
    pub global_name: Option<String>,

    /// Additional dependency to leave unbundled
    ///
    /// Can be specified multiple times. Declared dependencies and peer
    /// dependencies from package.json are always externalized.
    #[arg(long = "external", value_name = "MODULE")]
    pub external: Vec<String>,

    /// Output directory for artifacts
    #[arg(long, value_name = "DIR")]
    pub dist_dir: Option<PathBuf>,

    /// Parent directory for transpiler caches (defaults to the OS temp dir)
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Extracted stylesheet path (defaults to <dist-dir>/styles.css)
    #[arg(long, value_name = "FILE")]
    pub stylesheet: Option<PathBuf>,

    /// Project directory containing package.json
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

/// Package inputs plus the (format, environment) matrix
#[derive(Args, Debug, Clone, Default)]
pub struct MatrixArgs {
    #[command(flatten)]
    pub package: PackageArgs,

    /// Output format; repeat for several (default: all)
    #[arg(short = 'f', long = "format", value_enum)]
    pub formats: Vec<Format>,

    /// Build environment; repeat for several (default: both)
    #[arg(short = 'e', long = "env", value_enum)]
    pub environments: Vec<Env>,
}

/// Arguments for the compose command
#[derive(Args, Debug, Clone, Default)]
pub struct ComposeArgs {
    #[command(flatten)]
    pub matrix: MatrixArgs,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub package: PackageArgs,
}
