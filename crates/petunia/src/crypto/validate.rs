//! The one validation routine shared by every engine entry point.
//!
//! Checks run in three passes over an operation's arguments: presence, then
//! type, then length. Each pass walks the arguments in declaration order, and
//! the first failure is returned. Keeping the passes separate (rather than
//! fully validating one argument before moving to the next) is what makes
//! `(None, short_key)` report the missing message and not the short key.

use common::{CryptoError, Field, Input};

/// Pass 1: the argument must be present.
pub(crate) fn present<T>(field: Field, arg: Option<T>) -> Result<T, CryptoError> {
    arg.ok_or(CryptoError::MissingInput(field))
}

/// Pass 2: the argument must be a raw byte buffer.
pub(crate) fn bytes(field: Field, arg: &Input) -> Result<(), CryptoError> {
    match arg {
        Input::Bytes(_) => Ok(()),
        _ => Err(CryptoError::UnsupportedType(field)),
    }
}

/// Pass 2, message variant: a raw byte buffer or text.
pub(crate) fn message(arg: &Input) -> Result<(), CryptoError> {
    match arg {
        Input::Bytes(_) | Input::Text(_) => Ok(()),
        _ => Err(CryptoError::UnsupportedType(Field::Message)),
    }
}

/// Pass 3: a byte buffer of exactly `expected` bytes.
pub(crate) fn exact_len(field: Field, buf: &[u8], expected: usize) -> Result<(), CryptoError> {
    if buf.len() != expected {
        return Err(CryptoError::InvalidLength(field));
    }
    Ok(())
}

/// View an argument that has passed [`bytes`] or [`message`] as a byte slice.
///
/// Text is viewed as its UTF-8 encoding.
pub(crate) fn as_bytes(arg: &Input) -> &[u8] {
    match arg {
        Input::Bytes(b) => b,
        Input::Text(s) => s.as_bytes(),
        // Unreachable after the type pass; an empty view keeps this total.
        Input::Signed(_) | Input::Wide(_) => &[],
    }
}
