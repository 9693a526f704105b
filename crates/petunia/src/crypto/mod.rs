//! The crypto engine: validated secretbox operations and cipher-record encoding.
//!
//! This module holds the whole input-validation contract. It never logs and
//! never retries; every failure is returned to the immediate caller.
//!
//! # Check order
//!
//! ```text
//! presence  (declaration order)  -> MissingInput(field)
//! type      (declaration order)  -> UnsupportedType(field)
//! length    (key, then nonce)    -> InvalidLength(field)
//! primitive                      -> AuthenticationFailed | CryptoFailure
//! ```
//!
//! Cipher records skip the length pass and report every type failure as
//! `UnsupportedType(parameter)`.

pub mod cipher;
pub mod record;
mod validate;

pub use cipher::{Engine, SealedMessage};
pub use record::RecordParts;
