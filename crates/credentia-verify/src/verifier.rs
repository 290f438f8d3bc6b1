use serde::{Deserialize, Serialize};
use std::sync::Arc;

use credentia_core::AccountId;
use credentia_registry::Registry;

/// Result of verifying a (proof, issuer, holder) triple.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Whether the triple matches an issued certificate.
    pub valid: bool,
    /// Individual check results.
    pub checks: Vec<VerificationCheck>,
}

/// An individual verification check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationCheck {
    /// Name of the check.
    pub name: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Optional detail message.
    pub detail: Option<String>,
}

/// Verifies certificates against the registry. Read-only: holds the store
/// behind an `Arc` and never mutates it.
pub struct CertificateVerifier {
    registry: Arc<Registry>,
}

impl CertificateVerifier {
    /// Create a verifier over a registry.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Exact-match verification: `true` only if a certificate with this
    /// proof hash exists, its issuing organization is owned by `issuer`,
    /// and it is held by `holder`. Unknown proofs are `false`, not errors.
    pub fn verify(&self, proof_hash: &str, issuer: &AccountId, holder: &AccountId) -> bool {
        self.verify_detailed(proof_hash, issuer, holder).valid
    }

    /// Like [`Self::verify`], but reports every check individually.
    pub fn verify_detailed(
        &self,
        proof_hash: &str,
        issuer: &AccountId,
        holder: &AccountId,
    ) -> VerificationReport {
        let mut checks = Vec::new();

        // Check 1: Does the proof correspond to an issued certificate?
        let certificate = self.registry.certificate_by_proof(proof_hash);
        let proof_known = certificate.is_some();
        checks.push(VerificationCheck {
            name: "proof_known".into(),
            passed: proof_known,
            detail: if proof_known {
                None
            } else {
                Some(format!("no certificate issued with proof {}", proof_hash))
            },
        });

        let Some(certificate) = certificate else {
            tracing::debug!(proof = proof_hash, "verification failed: unknown proof");
            return VerificationReport {
                valid: false,
                checks,
            };
        };

        // Check 2: Is the issuing organization owned by the claimed issuer?
        let issuer_matches = self
            .registry
            .organization(certificate.issuer)
            .map(|org| &org.owner == issuer)
            .unwrap_or(false);
        checks.push(VerificationCheck {
            name: "issuer_matches".into(),
            passed: issuer_matches,
            detail: if issuer_matches {
                None
            } else {
                Some(format!(
                    "certificate was not issued by an organization owned by {}",
                    issuer
                ))
            },
        });

        // Check 3: Is the certificate held by the claimed holder?
        let holder_matches = &certificate.holder == holder;
        checks.push(VerificationCheck {
            name: "holder_matches".into(),
            passed: holder_matches,
            detail: if holder_matches {
                None
            } else {
                Some(format!("certificate is not held by {}", holder))
            },
        });

        let valid = issuer_matches && holder_matches;
        tracing::debug!(
            proof = proof_hash,
            certificate = %certificate.id,
            valid,
            "certificate verification"
        );

        VerificationReport { valid, checks }
    }
}
