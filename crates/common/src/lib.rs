//! Common types, transport records, and errors shared across `petunia` crates.

pub mod error;
pub mod input;
pub mod protocol;

pub use error::{CryptoError, Field};
pub use input::Input;
pub use protocol::CipherRecord;
