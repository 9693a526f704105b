//! Error taxonomy shared by the engine, the facade, and the CLI.

use std::fmt;

use thiserror::Error;

/// The role an argument plays in an operation.
///
/// Carried by validation errors so callers know which argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Plaintext to be sealed.
    Message,
    /// 32-byte secret key.
    Key,
    /// 24-byte one-time nonce.
    Nonce,
    /// Sealed bytes (tag followed by encrypted message).
    Ciphertext,
    /// Any argument of an encoding-only operation. Deliberately undifferentiated.
    Parameter,
}

impl Field {
    /// Lowercase name of the role, as used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Message => "message",
            Field::Key => "key",
            Field::Nonce => "nonce",
            Field::Ciphertext => "ciphertext",
            Field::Parameter => "parameter",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by every engine and facade operation.
///
/// Validation variants are produced before the cipher is ever invoked. The
/// first failing check wins, so the variant also tells the caller how far
/// validation got.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// A required argument was absent.
    #[error("missing input: {0}")]
    MissingInput(Field),

    /// The argument is present but not a raw byte buffer (or text, for a message).
    #[error("unsupported type: {0}")]
    UnsupportedType(Field),

    /// The argument has the right type but the wrong byte length for its role.
    #[error("invalid length: {0}")]
    InvalidLength(Field),

    /// A transport record field is not valid base64.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(Field),

    /// The authentication tag did not verify.
    ///
    /// Wrong key, wrong nonce, and tampered ciphertext all map here and are
    /// indistinguishable to the caller.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The underlying primitive failed in a way not covered above.
    #[error("crypto failure: {0}")]
    CryptoFailure(String),
}

impl CryptoError {
    /// Short machine-readable code, stable across releases.
    pub fn code(&self) -> &'static str {
        match self {
            CryptoError::MissingInput(_) => "missing_input",
            CryptoError::UnsupportedType(_) => "unsupported_type",
            CryptoError::InvalidLength(_) => "invalid_length",
            CryptoError::MalformedEncoding(_) => "malformed_encoding",
            CryptoError::AuthenticationFailed => "authentication_failed",
            CryptoError::CryptoFailure(_) => "crypto_failure",
        }
    }

    /// Returns the process exit status the CLI should use for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CryptoError::MissingInput(_)
            | CryptoError::UnsupportedType(_)
            | CryptoError::InvalidLength(_)
            | CryptoError::MalformedEncoding(_) => 2,
            CryptoError::AuthenticationFailed => 3,
            CryptoError::CryptoFailure(_) => 1,
        }
    }

    /// The argument role this error refers to, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            CryptoError::MissingInput(f)
            | CryptoError::UnsupportedType(f)
            | CryptoError::InvalidLength(f)
            | CryptoError::MalformedEncoding(f) => Some(*f),
            CryptoError::AuthenticationFailed | CryptoError::CryptoFailure(_) => None,
        }
    }
}
