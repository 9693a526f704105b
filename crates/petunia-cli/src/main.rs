//! `petunia` command-line entry point.
//!
//! Startup sequence:
//! 1. Parse arguments.
//! 2. Load and validate [`Config`] from environment variables.
//! 3. Initialise structured JSON logging on stderr.
//! 4. Await the crypto primitive's readiness.
//! 5. Run the subcommand.
//!
//! A crypto error prints an [`ErrorResponse`] line to stderr and exits with
//! [`CryptoError::exit_code`]. Any other failure exits with status 1.

mod cli;
mod commands;
mod config;
mod telemetry;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use common::protocol::ErrorResponse;
use petunia::{CryptoError, Petunia};
use tracing::{debug, info};

use cli::PetuniaCli;
use config::Config;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // -----------------------------------------------------------------------
    // 1. Arguments
    // -----------------------------------------------------------------------
    let args = PetuniaCli::parse();

    // -----------------------------------------------------------------------
    // 2. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 3. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init(&cfg.log_level)?;
    debug!(version = env!("CARGO_PKG_VERSION"), "petunia starting");

    // -----------------------------------------------------------------------
    // 4. Primitive readiness
    // -----------------------------------------------------------------------
    let petunia = Petunia::ready().await?;

    // -----------------------------------------------------------------------
    // 5. Command
    // -----------------------------------------------------------------------
    match commands::run(&petunia, args.command, &cfg) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => match e.downcast_ref::<CryptoError>() {
            Some(crypto) => {
                info!(code = crypto.code(), "operation rejected");
                eprintln!("{}", serde_json::to_string(&ErrorResponse::from(crypto))?);
                Ok(ExitCode::from(crypto.exit_code()))
            }
            None => Err(e),
        },
    }
}
