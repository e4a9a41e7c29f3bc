//! Logging infrastructure for the libpack CLI.
//!
//! Logs go to stderr so `compose` output on stdout stays machine-readable.
//!
//! # Example
//!
//! ```rust,no_run
//! use libpack_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Composing pipelines");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "libpack=debug,libpack_config=debug,libpack_cli=debug";
const QUIET_FILTER: &str = "libpack=error,libpack_config=error,libpack_cli=error";
const DEFAULT_FILTER: &str = "libpack=info,libpack_config=info,libpack_cli=info";

/// Build the filter for the given verbosity flags.
///
/// 1. `--verbose`: debug for libpack crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`, when set and valid
/// 4. info for libpack crates
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber.
///
/// Call once at the start of the program, before any logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && crate::ui::should_use_color())
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_parse() {
        // tracing is global; only filter construction is testable here
        let _ = EnvFilter::new(VERBOSE_FILTER);
        let _ = EnvFilter::new(QUIET_FILTER);
        let _ = EnvFilter::new(DEFAULT_FILTER);
    }

    #[test]
    fn test_verbose_wins() {
        let filter = build_filter(true, false);
        assert!(filter.to_string().to_lowercase().contains("libpack_config=debug"));
    }

    #[test]
    fn test_quiet_filter() {
        let filter = build_filter(false, true);
        assert!(filter.to_string().to_lowercase().contains("libpack_cli=error"));
    }
}
