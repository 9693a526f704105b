//! Loosely-typed operation arguments.
//!
//! Callers at a dynamic boundary (JSON payloads, FFI, scripting hosts) cannot
//! promise that a value is a byte buffer. [`Input`] names every shape such a
//! caller can hand over so the engine can reject the wrong ones explicitly
//! instead of coercing them. A missing argument is `None` in an
//! `Option<Input>`.

use zeroize::Zeroize;

/// A single argument as supplied by a caller.
#[derive(Clone, PartialEq, Eq)]
pub enum Input {
    /// Raw byte buffer. The only form accepted for keys, nonces, and ciphertext.
    Bytes(Vec<u8>),
    /// UTF-8 text. Accepted only as a message to encrypt.
    Text(String),
    /// Signed byte array. Same element width as [`Input::Bytes`] but a distinct type.
    Signed(Vec<i8>),
    /// Numeric array with 16-bit elements.
    Wide(Vec<u16>),
}

impl Input {
    /// Static label for the variant, safe to log.
    pub fn kind(&self) -> &'static str {
        match self {
            Input::Bytes(_) => "bytes",
            Input::Text(_) => "text",
            Input::Signed(_) => "signed",
            Input::Wide(_) => "wide",
        }
    }

    /// Number of elements held (bytes for text).
    pub fn len(&self) -> usize {
        match self {
            Input::Bytes(b) => b.len(),
            Input::Text(s) => s.len(),
            Input::Signed(v) => v.len(),
            Input::Wide(v) => v.len(),
        }
    }

    /// Returns `true` if the argument holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Zeroize for Input {
    fn zeroize(&mut self) {
        match self {
            Input::Bytes(b) => b.zeroize(),
            Input::Text(s) => s.zeroize(),
            Input::Signed(v) => v.zeroize(),
            Input::Wide(v) => v.zeroize(),
        }
    }
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Arguments may be key material; print the shape only.
        write!(f, "Input::{}(len = {})", self.kind(), self.len())
    }
}

impl From<Vec<u8>> for Input {
    fn from(value: Vec<u8>) -> Self {
        Input::Bytes(value)
    }
}

impl From<&[u8]> for Input {
    fn from(value: &[u8]) -> Self {
        Input::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Input {
    fn from(value: [u8; N]) -> Self {
        Input::Bytes(value.to_vec())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_owned())
    }
}

impl From<Vec<i8>> for Input {
    fn from(value: Vec<i8>) -> Self {
        Input::Signed(value)
    }
}

impl From<Vec<u16>> for Input {
    fn from(value: Vec<u16>) -> Self {
        Input::Wide(value)
    }
}
