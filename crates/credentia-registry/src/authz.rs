use credentia_core::{AccountId, CertificateId, OrganizationId, ProgramId};

use crate::store::Registry;

/// Reference to an entity whose ownership a mutation must establish.
///
/// Programs and certificates are owned transitively through their
/// organization's owning account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    Organization(OrganizationId),
    Program(ProgramId),
    Certificate(CertificateId),
}

impl Registry {
    /// Ownership predicate consulted before every mutation: does `caller`
    /// own the target entity? Pure read; unknown targets are simply not
    /// owned. Exact account-identifier equality, no role hierarchy, no
    /// delegation.
    pub fn authorize(&self, caller: &AccountId, target: &EntityRef) -> bool {
        let owner = match target {
            EntityRef::Organization(id) => self.organization(*id).map(|org| org.owner),
            EntityRef::Program(id) => self
                .program(*id)
                .and_then(|program| self.organization(program.organization))
                .map(|org| org.owner),
            EntityRef::Certificate(id) => self
                .certificate(*id)
                .and_then(|cert| self.organization(cert.issuer))
                .map(|org| org.owner),
        };
        owner.as_ref() == Some(caller)
    }
}
