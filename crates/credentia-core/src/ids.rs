use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque account identifier supplied by the hosting execution context.
///
/// The registry never generates these; it only compares them for exact
/// equality when checking ownership.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl AccountId {
    /// Create an account identifier from an opaque token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// Identifier of an organization record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrganizationId(pub u64);

/// Identifier of a program record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProgramId(pub u64);

/// Identifier of an instructor record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstructorId(pub u64);

/// Identifier of a student record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StudentId(pub u64);

/// Identifier of a certificate record. Doubles as the issued-at sequence
/// number: certificate ids are assigned from a single monotonic counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CertificateId(pub u64);

macro_rules! entity_id_impls {
    ($($id:ident),*) => {
        $(
            impl $id {
                /// Get the raw numeric value.
                pub fn value(&self) -> u64 {
                    self.0
                }
            }

            impl fmt::Display for $id {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }
        )*
    };
}

entity_id_impls!(OrganizationId, ProgramId, InstructorId, StudentId, CertificateId);

/// The kinds of entities held by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Organization,
    Program,
    Instructor,
    Student,
    Certificate,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Organization => write!(f, "organization"),
            Self::Program => write!(f, "program"),
            Self::Instructor => write!(f, "instructor"),
            Self::Student => write!(f, "student"),
            Self::Certificate => write!(f, "certificate"),
        }
    }
}
