use serde::{Deserialize, Serialize};

/// Configuration for a Credentia registry instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Registry display name.
    pub name: String,
    /// Maximum accepted length for display-name fields.
    pub max_name_len: usize,
    /// Maximum accepted length for contact fields.
    pub max_contact_len: usize,
    /// Maximum accepted length for proof hash strings.
    pub max_proof_len: usize,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            name: "credentia-registry".into(),
            max_name_len: 128,
            max_contact_len: 256,
            max_proof_len: 512,
            log_level: "info".into(),
        }
    }
}
