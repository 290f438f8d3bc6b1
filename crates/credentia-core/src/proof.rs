use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Opaque proof identifier bound to a certificate at issuance.
///
/// The registry does not interpret the string; it only requires it to be
/// non-blank and enforces global uniqueness at issuance time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProofHash(String);

impl ProofHash {
    /// Create a proof hash from an opaque string.
    pub fn new(hash: impl Into<String>) -> Result<Self, CoreError> {
        let hash = hash.into();
        if hash.trim().is_empty() {
            return Err(CoreError::InvalidProofHash(
                "proof hash must not be blank".into(),
            ));
        }
        Ok(Self(hash))
    }

    /// Derive a proof hash from raw document bytes as a hex-encoded
    /// BLAKE3 digest. Convenience for issuers; the registry itself never
    /// recomputes or checks this binding.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(blake3::hash(bytes).as_bytes()))
    }

    /// Get the proof hash string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProofHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
