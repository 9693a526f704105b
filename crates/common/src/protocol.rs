//! Transport types exchanged with callers.
//!
//! These types are serialised as JSON: cipher records by the CLI `encrypt`
//! command and by any caller persisting sealed data, error bodies on failure.

use serde::{Deserialize, Serialize};

use crate::error::CryptoError;

// ---------------------------------------------------------------------------
// Cipher record
// ---------------------------------------------------------------------------

/// A sealed message bundled with the key and nonce needed to open it.
///
/// Each field is standard-alphabet, padded base64. The record is a transport
/// shape only; it owns no key lifecycle of its own.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CipherRecord {
    /// Base64 ciphertext (tag followed by encrypted bytes).
    pub data: String,
    /// Base64 secret key.
    pub key: String,
    /// Base64 nonce.
    pub nonce: String,
}

impl std::fmt::Debug for CipherRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherRecord")
            .field("data", &self.data)
            .field("key", &"[REDACTED]")
            .field("nonce", &self.nonce)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Error body written by the CLI when an operation fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"invalid_length"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&CryptoError> for ErrorResponse {
    fn from(err: &CryptoError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;

    fn sample_record() -> CipherRecord {
        CipherRecord {
            data: "bhPvT+MsdXKopRp7jw35CfPh".into(),
            key: "X1IJ2SFW0oJVcGmmXqTt6Bh1NfD+uf40bkmWW/G8VLs=".into(),
            nonce: "UgJY4MykLeUh+Sm7SorFiC+GE4Ot+DN8".into(),
        }
    }

    #[test]
    fn cipher_record_uses_fixed_field_names() {
        let json = serde_json::to_value(sample_record()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["data"], "bhPvT+MsdXKopRp7jw35CfPh");
        assert_eq!(obj["key"], "X1IJ2SFW0oJVcGmmXqTt6Bh1NfD+uf40bkmWW/G8VLs=");
        assert_eq!(obj["nonce"], "UgJY4MykLeUh+Sm7SorFiC+GE4Ot+DN8");
    }

    #[test]
    fn cipher_record_parses_from_json() {
        let json = r#"{"data":"AA==","key":"AQ==","nonce":"Ag=="}"#;
        let record: CipherRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.data, "AA==");
        assert_eq!(record.nonce, "Ag==");
    }

    #[test]
    fn cipher_record_debug_redacts_key() {
        let out = format!("{:?}", sample_record());
        assert!(out.contains("REDACTED"));
        assert!(!out.contains("X1IJ2SFW"));
    }

    #[test]
    fn error_response_from_crypto_error() {
        let e = ErrorResponse::from(&CryptoError::InvalidLength(Field::Key));
        assert_eq!(e.code, "invalid_length");
        assert_eq!(e.message, "invalid length: key");
    }
}
