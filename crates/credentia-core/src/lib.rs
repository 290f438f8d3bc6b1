//! Credentia Core — Fundamental types, errors, and configuration for the
//! Credentia credential registry.

pub mod config;
pub mod error;
pub mod ids;
pub mod proof;

pub use config::RegistryConfig;
pub use error::CoreError;
pub use ids::{
    AccountId, CertificateId, EntityKind, InstructorId, OrganizationId, ProgramId, StudentId,
};
pub use proof::ProofHash;
