//! Credentia Verify — read-only verification of issued certificates.
//!
//! Answers whether a (proof, issuer, holder) triple matches a certificate
//! the registry has issued. Verification is a total query: unknown proofs
//! yield `false`, never an error.

pub mod verifier;

pub use verifier::{CertificateVerifier, VerificationCheck, VerificationReport};
