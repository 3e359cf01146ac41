//! Logging setup
//!
//! Both binaries log through the `log` facade; this installs the
//! `env_logger` backend. Output goes to stderr so it never mixes with
//! anything a tool prints on stdout.

use env_logger::Builder;
use log::LevelFilter;

/// Install the global logger
///
/// Warnings and errors are shown by default, `verbose` lowers the threshold
/// to debug, and `RUST_LOG` overrides both.
pub fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .format_target(false)
        .parse_env("RUST_LOG");

    if builder.try_init().is_err() {
        // Only happens if called twice
        eprintln!("Warning: Global logger was already initialized");
    }
}
