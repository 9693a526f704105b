//! Command-line argument structure for the `petunia` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Seal and open messages with XSalsa20-Poly1305.
///
/// `encrypt` prints a JSON cipher record (base64 data, key, nonce) to stdout;
/// `decrypt` reads such a record and writes the plaintext to stdout.
#[derive(Parser)]
#[command(name = "petunia", version, propagate_version = true)]
pub struct PetuniaCli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a message into a cipher record.
    Encrypt(EncryptArgs),
    /// Decrypt a cipher record.
    Decrypt(DecryptArgs),
}

/// Arguments for the `encrypt` subcommand.
#[derive(Parser)]
pub struct EncryptArgs {
    /// File to read the message from. Reads stdin when omitted or `-`.
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Base64 32-byte key. Falls back to `PETUNIA_KEY` when omitted.
    #[arg(long, short = 'k')]
    pub key: Option<String>,

    /// Base64 24-byte nonce to seal under instead of a generated one.
    ///
    /// Never use the same nonce twice with the same key.
    #[arg(long)]
    pub nonce: Option<String>,
}

/// Arguments for the `decrypt` subcommand.
#[derive(Parser)]
pub struct DecryptArgs {
    /// File holding the JSON cipher record. Reads stdin when omitted or `-`.
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,
}
