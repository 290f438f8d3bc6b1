//! Integration test: Verification engine against live registry state.
//!
//! Exercises credentia-verify over a registry populated through the
//! public mutation operations, including proof hashes derived from
//! document bytes.

use std::sync::Arc;

use credentia_core::{AccountId, ProofHash};
use credentia_registry::{Registry, RegistryError};
use credentia_verify::CertificateVerifier;

fn acct(token: &str) -> AccountId {
    AccountId::from(token)
}

fn issuing_registry() -> Arc<Registry> {
    let registry = Arc::new(Registry::new());
    registry
        .create_organization(&acct("issuer"), "Acme", "acme@x.org")
        .unwrap();
    registry
}

#[test]
fn test_verification_is_total_over_proofs() {
    let registry = issuing_registry();
    let verifier = CertificateVerifier::new(Arc::clone(&registry));

    // Nothing issued: every triple is false, never an error.
    assert!(!verifier.verify("hash1", &acct("issuer"), &acct("holder")));
    assert!(!verifier.verify("", &acct("issuer"), &acct("holder")));

    registry
        .issue_certificate(&acct("issuer"), "hash1", &acct("holder"))
        .unwrap();

    assert!(verifier.verify("hash1", &acct("issuer"), &acct("holder")));
    // Every other combination stays false.
    assert!(!verifier.verify("hash2", &acct("issuer"), &acct("holder")));
    assert!(!verifier.verify("hash1", &acct("holder"), &acct("issuer")));
    assert!(!verifier.verify("hash1", &acct("issuer"), &acct("issuer")));
}

#[test]
fn test_derived_proof_roundtrip() {
    let registry = issuing_registry();
    let verifier = CertificateVerifier::new(Arc::clone(&registry));

    // Issuer derives the proof from the diploma bytes it rendered.
    let diploma = b"Eve completed P1 with distinction";
    let proof = ProofHash::from_bytes(diploma);
    registry
        .issue_certificate(&acct("issuer"), proof.as_str(), &acct("eve"))
        .unwrap();

    // A verifier holding the same bytes re-derives the same proof.
    let rederived = ProofHash::from_bytes(diploma);
    assert!(verifier.verify(rederived.as_str(), &acct("issuer"), &acct("eve")));

    // Tampered bytes derive a different, unknown proof.
    let tampered = ProofHash::from_bytes(b"Eve completed P1");
    assert!(!verifier.verify(tampered.as_str(), &acct("issuer"), &acct("eve")));
}

#[test]
fn test_duplicate_proof_rejected_original_still_verifies() {
    let registry = issuing_registry();
    registry
        .create_organization(&acct("rival"), "Rival", "rival@x.org")
        .unwrap();
    let verifier = CertificateVerifier::new(Arc::clone(&registry));

    registry
        .issue_certificate(&acct("issuer"), "hash1", &acct("eve"))
        .unwrap();
    let result = registry.issue_certificate(&acct("rival"), "hash1", &acct("mallory"));
    assert!(matches!(result, Err(RegistryError::Conflict(_))));

    // The original binding is untouched.
    assert!(verifier.verify("hash1", &acct("issuer"), &acct("eve")));
    assert!(!verifier.verify("hash1", &acct("rival"), &acct("mallory")));
}

#[test]
fn test_detailed_report_names_the_failing_check() {
    let registry = issuing_registry();
    registry
        .issue_certificate(&acct("issuer"), "hash1", &acct("eve"))
        .unwrap();
    let verifier = CertificateVerifier::new(Arc::clone(&registry));

    let report = verifier.verify_detailed("hash1", &acct("issuer"), &acct("not-eve"));
    assert!(!report.valid);
    let failing: Vec<&str> = report
        .checks
        .iter()
        .filter(|c| !c.passed)
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(failing, vec!["holder_matches"]);

    // Reports serialize for the hosting runtime.
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("holder_matches"));
}
