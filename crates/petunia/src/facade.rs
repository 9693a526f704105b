//! [`Petunia`]: the stable public surface over [`Engine`].
//!
//! Every method forwards to the engine operation of the same name and returns
//! its result untouched. Errors are not caught, wrapped, or logged here.

use common::{CipherRecord, CryptoError, Input};

use crate::crypto::{Engine, RecordParts, SealedMessage};
use crate::primitive::{Primitive, SecretBox};

/// Public handle. Construct with [`Petunia::ready`] or [`Petunia::with_primitive`].
pub struct Petunia<P = SecretBox> {
    engine: Engine<P>,
}

impl Petunia {
    /// Initialise the default XSalsa20-Poly1305 backend.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::CryptoFailure`] if the OS random source is unusable.
    pub async fn ready() -> Result<Self, CryptoError> {
        Self::with_primitive(SecretBox::new()).await
    }
}

impl<P: Primitive> Petunia<P> {
    /// Initialise on top of a caller-supplied primitive.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::CryptoFailure`] if the primitive cannot become ready.
    pub async fn with_primitive(primitive: P) -> Result<Self, CryptoError> {
        let engine = Engine::init(primitive).await?;
        Ok(Self { engine })
    }

    /// See [`Engine::encrypt_with_key`].
    pub fn encrypt_with_key(
        &self,
        message: Option<Input>,
        key: Option<Input>,
    ) -> Result<SealedMessage, CryptoError> {
        self.engine.encrypt_with_key(message, key)
    }

    /// See [`Engine::decrypt_with_key`].
    pub fn decrypt_with_key(
        &self,
        ciphertext: Option<Input>,
        key: Option<Input>,
        nonce: Option<Input>,
    ) -> Result<Vec<u8>, CryptoError> {
        self.engine.decrypt_with_key(ciphertext, key, nonce)
    }

    /// See [`Engine::legacy_encrypt`].
    pub fn legacy_encrypt(
        &self,
        message: Option<Input>,
        key: Option<Input>,
        nonce: Option<Input>,
    ) -> Result<Vec<u8>, CryptoError> {
        self.engine.legacy_encrypt(message, key, nonce)
    }

    /// See [`Engine::legacy_decrypt`].
    pub fn legacy_decrypt(
        &self,
        ciphertext: Option<Input>,
        key: Option<Input>,
        nonce: Option<Input>,
    ) -> Result<Vec<u8>, CryptoError> {
        self.engine.legacy_decrypt(ciphertext, key, nonce)
    }

    /// See [`Engine::serialize_cipher_record`].
    pub fn serialize_cipher_record(
        &self,
        ciphertext: Option<Input>,
        key: Option<Input>,
        nonce: Option<Input>,
    ) -> Result<CipherRecord, CryptoError> {
        self.engine.serialize_cipher_record(ciphertext, key, nonce)
    }

    /// See [`Engine::deserialize_cipher_record`].
    pub fn deserialize_cipher_record(
        &self,
        record: &CipherRecord,
    ) -> Result<RecordParts, CryptoError> {
        self.engine.deserialize_cipher_record(record)
    }

    /// See [`Engine::decrypt_record`].
    pub fn decrypt_record(&self, record: &CipherRecord) -> Result<Vec<u8>, CryptoError> {
        self.engine.decrypt_record(record)
    }
}
