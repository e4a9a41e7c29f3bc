//! Command-line interface definition for libpack.
//!
//! # Command Structure
//!
//! - `libpack compose` - Emit pipeline configs as JSON
//! - `libpack outputs` - List artifact paths
//! - `libpack check` - Validate build inputs

mod commands;
pub mod enums;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, ComposeArgs, MatrixArgs, PackageArgs};
pub use enums::*;
pub use validation::parse_global;

/// libpack - bundling pipelines for library packages
#[derive(Parser, Debug)]
#[command(
    name = "libpack",
    version,
    about = "Compose bundling pipelines for library packages",
    long_about = "libpack turns a package's format, environment and target platform into\n\
                  ordered bundling pipeline descriptions, one per artifact, ready for\n\
                  an external bundling engine."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}
