//! Command implementations for the libpack CLI.
//!
//! - [`compose`] - Emit pipeline configs as JSON
//! - [`outputs`] - List artifact paths
//! - [`check`] - Validate build inputs

pub mod check;
pub mod compose;
pub mod outputs;
pub mod utils;

pub use check::execute as check_execute;
pub use compose::execute as compose_execute;
pub use outputs::execute as outputs_execute;
