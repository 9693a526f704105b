//! Telemetry initialisation for the CLI.
//!
//! Structured JSON logs only, written to stderr: stdout carries cipher
//! records and plaintext.
//!
//! Key material, nonces, and message contents never appear in log fields.
//! Lengths and operation names are fine.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Initialise the tracing subscriber at the configured log level.
///
/// `RUST_LOG` overrides `log_level` when set.
///
/// # Errors
///
/// Returns an error if the subscriber has already been set.
pub fn init(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise petunia tracing subscriber: {e}"))
}
