//! Validated secretbox encryption and decryption.
//!
//! Every operation takes its arguments as `Option<Input>` and runs them through
//! [`validate`](super::validate) before the primitive is called. Nothing that
//! fails validation ever reaches the cipher.
//!
//! Key arguments are moved into the engine and wiped when the call returns,
//! on success and on failure alike. This is best-effort hygiene: copies the
//! caller made before handing the key over are out of reach.

use common::{CryptoError, Field, Input};
use tracing::debug;
use zeroize::Zeroizing;

use super::validate;
use crate::primitive::{Primitive, PrimitiveError, SecretBox, KEY_LEN, NONCE_LEN};

/// Output of [`Engine::encrypt_with_key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedMessage {
    /// Tag followed by the encrypted message (`message.len() + 16` bytes).
    pub ciphertext: Vec<u8>,
    /// Freshly generated nonce the message was sealed under.
    pub nonce: [u8; NONCE_LEN],
}

/// Ready-to-use crypto engine.
///
/// The only way to obtain one is [`Engine::init`], which awaits the
/// primitive's readiness signal. Holding an `Engine` therefore proves the
/// primitive is usable. The engine keeps no per-call state and may be shared
/// across threads.
pub struct Engine<P = SecretBox> {
    pub(crate) primitive: P,
}

impl<P: Primitive> Engine<P> {
    /// Await the primitive's readiness and return the engine handle.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::CryptoFailure`] if the primitive cannot become ready.
    pub async fn init(primitive: P) -> Result<Self, CryptoError> {
        primitive
            .ready()
            .await
            .map_err(|e| CryptoError::CryptoFailure(e.to_string()))?;
        debug!("secretbox primitive ready");
        Ok(Self { primitive })
    }

    /// Encrypt `message` under `key` with a freshly generated nonce.
    ///
    /// Text messages are encrypted as their UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// In check order: [`CryptoError::MissingInput`] for message then key,
    /// [`CryptoError::UnsupportedType`] for message then key,
    /// [`CryptoError::InvalidLength`] for key then nonce, and
    /// [`CryptoError::CryptoFailure`] if the random source or the cipher fails.
    pub fn encrypt_with_key(
        &self,
        message: Option<Input>,
        key: Option<Input>,
    ) -> Result<SealedMessage, CryptoError> {
        let key = key.map(Zeroizing::new);

        let message = validate::present(Field::Message, message)?;
        let key = validate::present(Field::Key, key)?;

        validate::message(&message)?;
        validate::bytes(Field::Key, &key)?;

        let nonce = self
            .primitive
            .random_bytes(NONCE_LEN)
            .map_err(|e| CryptoError::CryptoFailure(e.to_string()))?;

        let key_bytes = validate::as_bytes(&key);
        validate::exact_len(Field::Key, key_bytes, KEY_LEN)?;
        let nonce: [u8; NONCE_LEN] = nonce
            .as_slice()
            .try_into()
            .map_err(|_| CryptoError::InvalidLength(Field::Nonce))?;

        let ciphertext = self
            .primitive
            .seal(validate::as_bytes(&message), &nonce, key_bytes)
            .map_err(|e| CryptoError::CryptoFailure(e.to_string()))?;

        Ok(SealedMessage { ciphertext, nonce })
    }

    /// Verify and decrypt `ciphertext` with `key` and `nonce`.
    ///
    /// No plaintext is returned unless the authentication tag verifies.
    ///
    /// # Errors
    ///
    /// In check order: [`CryptoError::MissingInput`] and then
    /// [`CryptoError::UnsupportedType`] for ciphertext, key, nonce;
    /// [`CryptoError::InvalidLength`] for key then nonce; and
    /// [`CryptoError::AuthenticationFailed`] if the tag does not verify.
    pub fn decrypt_with_key(
        &self,
        ciphertext: Option<Input>,
        key: Option<Input>,
        nonce: Option<Input>,
    ) -> Result<Vec<u8>, CryptoError> {
        let key = key.map(Zeroizing::new);

        let ciphertext = validate::present(Field::Ciphertext, ciphertext)?;
        let key = validate::present(Field::Key, key)?;
        let nonce = validate::present(Field::Nonce, nonce)?;

        validate::bytes(Field::Ciphertext, &ciphertext)?;
        validate::bytes(Field::Key, &key)?;
        validate::bytes(Field::Nonce, &nonce)?;

        let key_bytes = validate::as_bytes(&key);
        let nonce_bytes = validate::as_bytes(&nonce);
        validate::exact_len(Field::Key, key_bytes, KEY_LEN)?;
        validate::exact_len(Field::Nonce, nonce_bytes, NONCE_LEN)?;

        self.primitive
            .open(validate::as_bytes(&ciphertext), nonce_bytes, key_bytes)
            .map_err(|e| match e {
                PrimitiveError::VerificationFailed => CryptoError::AuthenticationFailed,
                other => CryptoError::CryptoFailure(other.to_string()),
            })
    }

    /// Encrypt `message` under a caller-managed `nonce`.
    ///
    /// The caller is responsible for never reusing a nonce with the same key.
    /// Prefer [`Engine::encrypt_with_key`], which generates the nonce itself.
    ///
    /// # Errors
    ///
    /// Same as [`Engine::encrypt_with_key`], with the nonce checked for
    /// presence and type after the key.
    pub fn legacy_encrypt(
        &self,
        message: Option<Input>,
        key: Option<Input>,
        nonce: Option<Input>,
    ) -> Result<Vec<u8>, CryptoError> {
        let key = key.map(Zeroizing::new);

        let message = validate::present(Field::Message, message)?;
        let key = validate::present(Field::Key, key)?;
        let nonce = validate::present(Field::Nonce, nonce)?;

        validate::message(&message)?;
        validate::bytes(Field::Key, &key)?;
        validate::bytes(Field::Nonce, &nonce)?;

        let key_bytes = validate::as_bytes(&key);
        let nonce_bytes = validate::as_bytes(&nonce);
        validate::exact_len(Field::Key, key_bytes, KEY_LEN)?;
        validate::exact_len(Field::Nonce, nonce_bytes, NONCE_LEN)?;

        self.primitive
            .seal(validate::as_bytes(&message), nonce_bytes, key_bytes)
            .map_err(|e| CryptoError::CryptoFailure(e.to_string()))
    }

    /// Decrypt with a caller-managed nonce. Identical to [`Engine::decrypt_with_key`].
    pub fn legacy_decrypt(
        &self,
        ciphertext: Option<Input>,
        key: Option<Input>,
        nonce: Option<Input>,
    ) -> Result<Vec<u8>, CryptoError> {
        self.decrypt_with_key(ciphertext, key, nonce)
    }
}
