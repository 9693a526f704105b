//! Base64 cipher records: the JSON-safe form of a (ciphertext, key, nonce) triple.
//!
//! Encoding is pure transport. No length is checked here; a record with a
//! 3-byte key encodes and decodes fine and only fails once it reaches
//! [`Engine::decrypt_with_key`].

use base64::{engine::general_purpose::STANDARD, Engine as _};
use common::{CipherRecord, CryptoError, Field, Input};
use zeroize::Zeroizing;

use super::cipher::Engine;
use super::validate;
use crate::primitive::Primitive;

/// The raw byte buffers decoded from a [`CipherRecord`].
pub struct RecordParts {
    /// Tag followed by the encrypted message.
    pub ciphertext: Vec<u8>,
    /// Secret key; wiped when dropped.
    pub key: Zeroizing<Vec<u8>>,
    /// Nonce the message was sealed under.
    pub nonce: Vec<u8>,
}

impl std::fmt::Debug for RecordParts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordParts")
            .field("ciphertext_len", &self.ciphertext.len())
            .field("key", &"[REDACTED]")
            .field("nonce_len", &self.nonce.len())
            .finish()
    }
}

impl<P: Primitive> Engine<P> {
    /// Base64-encode each argument into a [`CipherRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::UnsupportedType`] with [`Field::Parameter`] if any
    /// argument is absent or not a raw byte buffer. The error does not say which.
    pub fn serialize_cipher_record(
        &self,
        ciphertext: Option<Input>,
        key: Option<Input>,
        nonce: Option<Input>,
    ) -> Result<CipherRecord, CryptoError> {
        let key = key.map(Zeroizing::new);

        let ciphertext = parameter(ciphertext.as_ref())?;
        let key = parameter(key.as_deref())?;
        let nonce = parameter(nonce.as_ref())?;

        Ok(CipherRecord {
            data: STANDARD.encode(ciphertext),
            key: STANDARD.encode(key),
            nonce: STANDARD.encode(nonce),
        })
    }

    /// Decode the three fields of `record` back into byte buffers.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::MalformedEncoding`] naming the first field (data,
    /// key, nonce) that is not valid standard base64.
    pub fn deserialize_cipher_record(
        &self,
        record: &CipherRecord,
    ) -> Result<RecordParts, CryptoError> {
        let ciphertext = decode(Field::Ciphertext, &record.data)?;
        let key = Zeroizing::new(decode(Field::Key, &record.key)?);
        let nonce = decode(Field::Nonce, &record.nonce)?;
        Ok(RecordParts {
            ciphertext,
            key,
            nonce,
        })
    }

    /// Decode `record` and decrypt it.
    ///
    /// # Errors
    ///
    /// Any error from [`Engine::deserialize_cipher_record`] or
    /// [`Engine::decrypt_with_key`].
    pub fn decrypt_record(&self, record: &CipherRecord) -> Result<Vec<u8>, CryptoError> {
        let mut parts = self.deserialize_cipher_record(record)?;
        // Moved out of the guard; decrypt_with_key wipes it.
        let key = std::mem::take(&mut *parts.key);
        self.decrypt_with_key(
            Some(Input::Bytes(parts.ciphertext)),
            Some(Input::Bytes(key)),
            Some(Input::Bytes(parts.nonce)),
        )
    }
}

fn parameter(arg: Option<&Input>) -> Result<&[u8], CryptoError> {
    let arg = arg.ok_or(CryptoError::UnsupportedType(Field::Parameter))?;
    validate::bytes(Field::Parameter, arg)?;
    Ok(validate::as_bytes(arg))
}

fn decode(field: Field, text: &str) -> Result<Vec<u8>, CryptoError> {
    STANDARD
        .decode(text)
        .map_err(|_| CryptoError::MalformedEncoding(field))
}
