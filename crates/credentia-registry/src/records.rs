use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use credentia_core::{
    AccountId, CertificateId, InstructorId, OrganizationId, ProgramId, ProofHash, StudentId,
};

/// An organization: runs programs and issues certificates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    pub contact: String,
    /// Owning account. Immutable after creation.
    pub owner: AccountId,
    pub created_at: DateTime<Utc>,
}

/// A program run by exactly one organization, grouping instructors
/// and students.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub id: ProgramId,
    pub name: String,
    /// Owning organization. Immutable after creation.
    pub organization: OrganizationId,
    /// Member instructors in enrollment order. Grows, never shrinks.
    pub instructors: Vec<InstructorId>,
    /// Member students in enrollment order. Grows, never shrinks.
    pub students: Vec<StudentId>,
    pub created_at: DateTime<Utc>,
}

impl Program {
    /// Whether the instructor is already enrolled in this program.
    pub fn has_instructor(&self, id: InstructorId) -> bool {
        self.instructors.contains(&id)
    }

    /// Whether the student is already enrolled in this program.
    pub fn has_student(&self, id: StudentId) -> bool {
        self.students.contains(&id)
    }
}

/// An instructor record. May be referenced by any number of programs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    pub id: InstructorId,
    pub name: String,
    pub contact: String,
    /// Owning account. Immutable after creation.
    pub owner: AccountId,
    pub created_at: DateTime<Utc>,
}

/// A student record. May be referenced by programs and hold certificates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub contact: String,
    /// Owning account. Immutable after creation.
    pub owner: AccountId,
    pub created_at: DateTime<Utc>,
}

/// An issued certificate. Immutable and never deleted.
///
/// The holder is kept as a raw account identifier; a matching `Student`
/// record, if one exists, is resolved lazily by the registry rather than
/// stored here, so issuance never depends on registration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    /// Identifier, doubling as the issued-at sequence number.
    pub id: CertificateId,
    /// Globally unique proof identifier.
    pub proof_hash: ProofHash,
    /// Issuing organization. Immutable.
    pub issuer: OrganizationId,
    /// Holder account. Immutable.
    pub holder: AccountId,
    pub issued_at: DateTime<Utc>,
}
