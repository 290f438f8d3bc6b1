//! Integration test: Full registry lifecycle across crates.
//!
//! Tests the organization → program → enrollment → issuance flow using
//! credentia-registry and credentia-verify together.

use std::sync::Arc;

use credentia_core::AccountId;
use credentia_registry::{Registry, RegistryError};
use credentia_verify::CertificateVerifier;

fn acct(token: &str) -> AccountId {
    AccountId::from(token)
}

// =========================================================================
// End-to-end scenario: organization to verified certificate
// =========================================================================

#[test]
fn test_full_lifecycle() {
    let registry = Arc::new(Registry::new());
    let org_account = acct("account-acme");
    let student_account = acct("account-eve");

    // Organization "Acme" registers and opens a program.
    registry
        .create_organization(&org_account, "Acme", "contact@acme.org")
        .expect("organization creation should succeed");
    let program = registry
        .create_program(&org_account, "P1")
        .expect("program creation should succeed");

    let mine = registry.my_programs(&org_account);
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, program);

    // Instructor "Bob" is enrolled.
    registry
        .add_instructor_to_program(&org_account, program, "Bob", "b@x")
        .expect("instructor enrollment should succeed");
    assert_eq!(registry.instructors_by_program(program).unwrap().len(), 1);

    // Student "Eve" registers herself, then is enrolled by the organization.
    registry
        .create_student(&student_account, "Eve", "eve@x")
        .expect("student registration should succeed");
    registry
        .add_student_to_program(&org_account, program, "Eve", "eve@x")
        .expect("student enrollment should succeed");
    assert_eq!(registry.students_by_program(program).unwrap().len(), 1);

    // Acme issues a certificate to Eve's account.
    registry
        .issue_certificate(&org_account, "hash1", &student_account)
        .expect("issuance should succeed");
    assert_eq!(registry.certificates_by_student(&student_account).len(), 1);
    assert_eq!(registry.my_certificates(&student_account).len(), 1);

    // Anyone can verify the triple.
    let verifier = CertificateVerifier::new(Arc::clone(&registry));
    assert!(verifier.verify("hash1", &org_account, &student_account));
    assert!(!verifier.verify("hash1", &org_account, &acct("some-other-account")));
}

#[test]
fn test_counts_across_the_flow() {
    let registry = Registry::new();
    registry
        .create_organization(&acct("a"), "Acme", "acme@x.org")
        .unwrap();
    registry.create_program(&acct("a"), "P1").unwrap();
    registry.create_program(&acct("a"), "P2").unwrap();
    registry.create_instructor(&acct("i"), "Bob", "b@x").unwrap();
    registry.create_student(&acct("s"), "Eve", "e@x").unwrap();

    assert_eq!(registry.organization_count(), 1);
    assert_eq!(registry.program_count(), 2);
    assert_eq!(registry.instructor_count(), 1);
    assert_eq!(registry.student_count(), 1);
    assert_eq!(registry.certificate_count(), 0);
}

// =========================================================================
// Authorization boundaries between organizations
// =========================================================================

#[test]
fn test_foreign_organization_cannot_touch_program() {
    let registry = Registry::new();
    registry
        .create_organization(&acct("a"), "Acme", "acme@x.org")
        .unwrap();
    let program = registry.create_program(&acct("a"), "P1").unwrap();
    registry
        .create_organization(&acct("b"), "Rival", "rival@x.org")
        .unwrap();

    let result = registry.add_instructor_to_program(&acct("b"), program, "Mallory", "m@x");
    assert!(matches!(result, Err(RegistryError::Unauthorized(_))));
    assert!(registry.instructors_by_program(program).unwrap().is_empty());

    // The rightful owner still can.
    registry
        .add_instructor_to_program(&acct("a"), program, "Bob", "b@x")
        .unwrap();
    assert_eq!(registry.instructors_by_program(program).unwrap().len(), 1);
}

#[test]
fn test_two_organizations_issue_independently() {
    let registry = Arc::new(Registry::new());
    registry
        .create_organization(&acct("a"), "Acme", "acme@x.org")
        .unwrap();
    registry
        .create_organization(&acct("b"), "Beta", "beta@x.org")
        .unwrap();

    registry
        .issue_certificate(&acct("a"), "acme-proof", &acct("e"))
        .unwrap();
    registry
        .issue_certificate(&acct("b"), "beta-proof", &acct("e"))
        .unwrap();

    // The holder sees both certificates, in issuance order.
    let held = registry.certificates_by_student(&acct("e"));
    assert_eq!(held.len(), 2);
    assert!(held[0].id < held[1].id);

    // Each proof verifies only against its own issuer.
    let verifier = CertificateVerifier::new(Arc::clone(&registry));
    assert!(verifier.verify("acme-proof", &acct("a"), &acct("e")));
    assert!(!verifier.verify("acme-proof", &acct("b"), &acct("e")));
    assert!(verifier.verify("beta-proof", &acct("b"), &acct("e")));
    assert!(!verifier.verify("beta-proof", &acct("a"), &acct("e")));
}

// =========================================================================
// Identity resolution across roles
// =========================================================================

#[test]
fn test_one_account_holding_every_role() {
    let registry = Registry::new();
    let account = acct("jack-of-all-trades");

    registry
        .create_organization(&account, "Solo Org", "solo@x.org")
        .unwrap();
    registry
        .create_instructor(&account, "Solo", "solo@x.org")
        .unwrap();
    registry
        .create_student(&account, "Solo", "solo@x.org")
        .unwrap();

    let ctx = registry.resolve_caller(&account);
    assert!(ctx.organization.is_some());
    assert!(ctx.instructor.is_some());
    assert!(ctx.student.is_some());
    assert!(!ctx.is_anonymous());
}

#[test]
fn test_issue_before_student_registration() {
    let registry = Registry::new();
    registry
        .create_organization(&acct("a"), "Acme", "acme@x.org")
        .unwrap();

    // Eve has no student record yet; issuance still succeeds against her
    // raw account, and resolution catches up once she registers.
    registry
        .issue_certificate(&acct("a"), "early-proof", &acct("eve"))
        .unwrap();
    assert!(registry.holder_student(&acct("eve")).is_none());
    assert_eq!(registry.certificates_by_student(&acct("eve")).len(), 1);

    registry.create_student(&acct("eve"), "Eve", "eve@x").unwrap();
    let resolved = registry.holder_student(&acct("eve")).unwrap();
    assert_eq!(resolved.name, "Eve");
}
