//! XSalsa20-Poly1305 secretbox backed by RustCrypto.
//!
//! **Wire compatibility:** output matches NaCl / libsodium
//! `crypto_secretbox_easy`: the 16-byte Poly1305 tag comes first, followed by
//! the encrypted message. Ciphertext produced here opens with any other
//! secretbox implementation and vice versa.
//!
//! **Nonces are never reused by this module**, but it cannot stop a caller
//! from passing the same nonce twice. Under XSalsa20 a repeated (key, nonce)
//! pair leaks the XOR of both plaintexts.

use async_trait::async_trait;
use crypto_secretbox::{
    aead::{generic_array::GenericArray, rand_core::RngCore, Aead, KeyInit, OsRng},
    XSalsa20Poly1305,
};

use super::{Primitive, PrimitiveError};

/// Byte length of a secretbox key (32 bytes = 256 bits).
pub const KEY_LEN: usize = 32;

/// Byte length of an XSalsa20 nonce (24 bytes = 192 bits).
pub const NONCE_LEN: usize = 24;

/// Byte length of the Poly1305 authentication tag.
pub const TAG_LEN: usize = 16;

/// Production [`Primitive`]: XSalsa20-Poly1305 with the OS CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretBox;

impl SecretBox {
    /// Create a new backend handle. Stateless; cheap to copy.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Primitive for SecretBox {
    async fn ready(&self) -> Result<(), PrimitiveError> {
        // The cipher needs no setup; the only thing that can be missing is entropy.
        let mut probe = [0u8; NONCE_LEN];
        OsRng
            .try_fill_bytes(&mut probe)
            .map_err(|e| PrimitiveError::Unavailable(e.to_string()))
    }

    fn random_bytes(&self, len: usize) -> Result<Vec<u8>, PrimitiveError> {
        let mut buf = vec![0u8; len];
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| PrimitiveError::Random(e.to_string()))?;
        Ok(buf)
    }

    fn seal(&self, message: &[u8], nonce: &[u8], key: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
        let cipher = build_cipher(key)?;
        check_nonce(nonce)?;
        cipher
            .encrypt(GenericArray::from_slice(nonce), message)
            .map_err(|_| PrimitiveError::InvalidInput)
    }

    fn open(
        &self,
        ciphertext: &[u8],
        nonce: &[u8],
        key: &[u8],
    ) -> Result<Vec<u8>, PrimitiveError> {
        let cipher = build_cipher(key)?;
        check_nonce(nonce)?;
        cipher
            .decrypt(GenericArray::from_slice(nonce), ciphertext)
            .map_err(|_| PrimitiveError::VerificationFailed)
    }
}

fn build_cipher(key: &[u8]) -> Result<XSalsa20Poly1305, PrimitiveError> {
    if key.len() != KEY_LEN {
        return Err(PrimitiveError::InvalidInput);
    }
    XSalsa20Poly1305::new_from_slice(key).map_err(|_| PrimitiveError::InvalidInput)
}

// `GenericArray::from_slice` panics on a length mismatch.
fn check_nonce(nonce: &[u8]) -> Result<(), PrimitiveError> {
    if nonce.len() != NONCE_LEN {
        return Err(PrimitiveError::InvalidInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn random_key() -> Vec<u8> {
        SecretBox.random_bytes(KEY_LEN).unwrap()
    }

    #[tokio::test]
    async fn ready_succeeds_with_os_rng() {
        assert!(SecretBox::new().ready().await.is_ok());
    }

    #[test]
    fn random_bytes_has_requested_length() {
        assert_eq!(SecretBox.random_bytes(0).unwrap().len(), 0);
        assert_eq!(SecretBox.random_bytes(NONCE_LEN).unwrap().len(), NONCE_LEN);
        assert_eq!(SecretBox.random_bytes(1000).unwrap().len(), 1000);
    }

    #[test]
    fn seal_appends_tag_overhead() {
        let key = random_key();
        let nonce = SecretBox.random_bytes(NONCE_LEN).unwrap();
        let sealed = SecretBox.seal(b"hello", &nonce, &key).unwrap();
        assert_eq!(sealed.len(), 5 + TAG_LEN);
    }

    #[test]
    fn seal_open_round_trip() {
        let key = random_key();
        let nonce = SecretBox.random_bytes(NONCE_LEN).unwrap();
        let sealed = SecretBox.seal(b"hello", &nonce, &key).unwrap();
        assert_eq!(SecretBox.open(&sealed, &nonce, &key).unwrap(), b"hello");
    }

    #[test]
    fn open_rejects_short_ciphertext() {
        let key = random_key();
        let nonce = SecretBox.random_bytes(NONCE_LEN).unwrap();
        assert_eq!(
            SecretBox.open(&[0u8; TAG_LEN - 1], &nonce, &key),
            Err(PrimitiveError::VerificationFailed)
        );
    }

    #[test]
    fn wrong_lengths_are_rejected_without_panicking() {
        let key = random_key();
        assert_eq!(
            SecretBox.seal(b"x", &[0u8; 12], &key),
            Err(PrimitiveError::InvalidInput)
        );
        assert_eq!(
            SecretBox.seal(b"x", &[0u8; NONCE_LEN], &key[..16]),
            Err(PrimitiveError::InvalidInput)
        );
        assert_eq!(
            SecretBox.open(b"x", &[0u8; 12], &key),
            Err(PrimitiveError::InvalidInput)
        );
    }
}
