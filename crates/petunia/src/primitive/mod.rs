//! The authenticated-encryption capability the engine is built on.
//!
//! The engine never touches a cipher directly. Everything it needs from the
//! outside world goes through [`Primitive`]: a one-time readiness signal, a
//! secure random source, and the seal/open pair. [`SecretBox`] is the
//! production implementation.

pub mod secretbox;

pub use secretbox::{SecretBox, KEY_LEN, NONCE_LEN, TAG_LEN};

use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a [`Primitive`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveError {
    /// The primitive could not become ready (e.g. no entropy source).
    #[error("primitive unavailable: {0}")]
    Unavailable(String),

    /// The random source failed to produce bytes.
    #[error("random source failure: {0}")]
    Random(String),

    /// Key or nonce rejected by the cipher itself.
    #[error("cipher rejected its input")]
    InvalidInput,

    /// The authentication tag did not verify.
    #[error("verification failed")]
    VerificationFailed,
}

/// Capability interface over an authenticated secret-key cipher.
///
/// Implementations must be reentrant: the engine holds one instance and calls
/// it from whatever thread the caller is on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Primitive: Send + Sync {
    /// Resolve once the primitive is usable. Called exactly once, by
    /// [`Engine::init`](crate::Engine::init).
    async fn ready(&self) -> Result<(), PrimitiveError>;

    /// Return `len` bytes from a cryptographically secure random source.
    fn random_bytes(&self, len: usize) -> Result<Vec<u8>, PrimitiveError>;

    /// Encrypt and authenticate `message`.
    fn seal(&self, message: &[u8], nonce: &[u8], key: &[u8]) -> Result<Vec<u8>, PrimitiveError>;

    /// Verify and decrypt `ciphertext`. Returns [`PrimitiveError::VerificationFailed`]
    /// without any plaintext if the tag does not match.
    fn open(&self, ciphertext: &[u8], nonce: &[u8], key: &[u8])
        -> Result<Vec<u8>, PrimitiveError>;
}
