//! Subcommand implementations.
//!
//! Each command is generic over its reader and writer so tests can drive it
//! with in-memory buffers.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use petunia::{CipherRecord, Input, Petunia, Primitive};
use tracing::{debug, info};

use crate::cli::Commands;
use crate::config::Config;

/// Dispatch a parsed subcommand against stdin/stdout or the named files.
pub fn run<P: Primitive>(petunia: &Petunia<P>, command: Commands, cfg: &Config) -> Result<()> {
    let stdout = io::stdout();
    match command {
        Commands::Encrypt(args) => {
            let key = resolve_key(args.key.as_deref(), cfg.key.as_deref())?;
            let nonce = args
                .nonce
                .as_deref()
                .map(|n| STANDARD.decode(n.trim()).context("nonce is not valid base64"))
                .transpose()?;
            let reader = open_input(args.input.as_deref())?;
            encrypt(petunia, reader, stdout.lock(), key, nonce)
        }
        Commands::Decrypt(args) => {
            let reader = open_input(args.input.as_deref())?;
            decrypt(petunia, reader, stdout.lock())
        }
    }
}

/// Read a message from `reader`, seal it, and write the cipher record as JSON.
///
/// With `nonce` the message is sealed under that nonce; otherwise a fresh one
/// is generated.
pub fn encrypt<P, R, W>(
    petunia: &Petunia<P>,
    mut reader: R,
    mut writer: W,
    key: Vec<u8>,
    nonce: Option<Vec<u8>>,
) -> Result<()>
where
    P: Primitive,
    R: Read,
    W: Write,
{
    let mut message = Vec::new();
    reader
        .read_to_end(&mut message)
        .context("failed to read message")?;
    debug!(
        message_len = message.len(),
        caller_nonce = nonce.is_some(),
        "encrypting message"
    );

    // The record carries its own copy; the engine wipes the one it consumes.
    let record_key = key.clone();
    let (ciphertext, nonce) = match nonce {
        Some(nonce) => {
            let ciphertext = petunia.legacy_encrypt(
                Some(Input::Bytes(message)),
                Some(Input::Bytes(key)),
                Some(Input::Bytes(nonce.clone())),
            )?;
            (ciphertext, nonce)
        }
        None => {
            let sealed =
                petunia.encrypt_with_key(Some(Input::Bytes(message)), Some(Input::Bytes(key)))?;
            (sealed.ciphertext, sealed.nonce.to_vec())
        }
    };
    let ciphertext_len = ciphertext.len();

    let record = petunia.serialize_cipher_record(
        Some(Input::Bytes(ciphertext)),
        Some(Input::Bytes(record_key)),
        Some(Input::Bytes(nonce)),
    )?;
    serde_json::to_writer_pretty(&mut writer, &record).context("failed to write cipher record")?;
    writeln!(writer).context("failed to write cipher record")?;

    info!(ciphertext_len, "message encrypted");
    Ok(())
}

/// Read a JSON cipher record from `reader`, open it, and write the plaintext.
pub fn decrypt<P, R, W>(petunia: &Petunia<P>, reader: R, mut writer: W) -> Result<()>
where
    P: Primitive,
    R: Read,
    W: Write,
{
    let record: CipherRecord =
        serde_json::from_reader(reader).context("input is not a JSON cipher record")?;
    let plaintext = petunia.decrypt_record(&record)?;

    writer
        .write_all(&plaintext)
        .and_then(|()| writer.flush())
        .context("failed to write plaintext")?;

    info!(plaintext_len = plaintext.len(), "record decrypted");
    Ok(())
}

/// Pick the key from the command line or configuration and decode it.
///
/// # Errors
///
/// Returns an error if neither source supplies a key or the key is not base64.
pub fn resolve_key(flag: Option<&str>, configured: Option<&str>) -> Result<Vec<u8>> {
    let encoded = flag
        .or(configured)
        .context("no key supplied: pass --key or set PETUNIA_KEY")?;
    STANDARD
        .decode(encoded.trim())
        .context("key is not valid base64")
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>> {
    match path {
        None => Ok(Box::new(io::stdin())),
        Some(p) if p == Path::new("-") => Ok(Box::new(io::stdin())),
        Some(p) => {
            let file =
                File::open(p).with_context(|| format!("failed to open {}", p.display()))?;
            Ok(Box::new(file))
        }
    }
}
