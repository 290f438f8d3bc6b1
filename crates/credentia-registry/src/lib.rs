//! Credentia Registry
//!
//! The stateful core of the Credentia credential system:
//! - Entity records (organizations, programs, instructors, students,
//!   certificates) with monotonically assigned identifiers
//! - Account identity index mapping caller accounts to owned records
//! - Ownership guard consulted before every mutation
//! - The `Registry` store exposing all mutation and query operations
//!
//! Every mutation resolves the caller's identity first, then authorizes,
//! then validates, and only then writes — a failed call never leaves the
//! store partially updated.

pub mod authz;
pub mod error;
pub mod identity;
pub mod records;
pub mod store;

pub use authz::EntityRef;
pub use error::RegistryError;
pub use identity::IdentityContext;
pub use records::{Certificate, Instructor, Organization, Program, Student};
pub use store::Registry;
