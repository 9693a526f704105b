//! `petunia`: authenticated secret-key encryption behind a strict input contract.
//!
//! Callers start with [`Petunia::ready`], which awaits the primitive's one-time
//! readiness step and returns a handle. All operations hang off that handle.
//!
//! ```no_run
//! # async fn demo() -> Result<(), petunia::CryptoError> {
//! use petunia::{Input, Petunia};
//!
//! let petunia = Petunia::ready().await?;
//! let key = vec![7u8; petunia::KEY_LEN];
//!
//! let sealed = petunia.encrypt_with_key(Some("hi".into()), Some(key.clone().into()))?;
//! let plaintext = petunia.decrypt_with_key(
//!     Some(sealed.ciphertext.into()),
//!     Some(Input::Bytes(key)),
//!     Some(sealed.nonce.into()),
//! )?;
//! assert_eq!(plaintext, b"hi");
//! # Ok(())
//! # }
//! ```

pub mod crypto;
pub mod facade;
pub mod primitive;

pub use common::{CipherRecord, CryptoError, Field, Input};
pub use crypto::{Engine, RecordParts, SealedMessage};
pub use facade::Petunia;
pub use primitive::{Primitive, PrimitiveError, SecretBox, KEY_LEN, NONCE_LEN, TAG_LEN};
