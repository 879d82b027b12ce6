//! Logging setup for the CLI, built on the `tracing` ecosystem.
//!
//! Verbosity is controlled by the global flags: `--verbose` turns on debug
//! logging for the packwright crates, `--quiet` drops everything below
//! errors, and `RUST_LOG` still works for custom filters when neither flag
//! is given.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program, before any logging occurs.
///
/// The filter is chosen in this order:
/// 1. `--verbose`: DEBUG for the packwright crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: INFO for the packwright crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("packwright_config=debug,packwright_presets=debug,packwright_cli=debug")
    } else if quiet {
        EnvFilter::new("packwright_config=error,packwright_presets=error,packwright_cli=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("packwright_config=info,packwright_presets=info,packwright_cli=info")
        })
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
