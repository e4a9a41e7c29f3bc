//! libpack command-line interface library.
//!
//! Exposes the CLI pieces so they can be exercised from integration tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod settings;
pub mod ui;

pub use error::{CliError, Result};
