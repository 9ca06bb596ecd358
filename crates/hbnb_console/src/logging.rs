//! Tracing subscriber setup for the console binary.
//!
//! Logs go to stderr so stdout carries only command output.

use hbnb_foundation::{Error, ErrorKind, Result};
use tracing_subscriber::EnvFilter;

/// Returns the default filter directive for a `-v` count.
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `verbosity` when it is set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))
}
