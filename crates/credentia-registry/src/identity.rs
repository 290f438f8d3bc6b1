use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use credentia_core::{AccountId, InstructorId, OrganizationId, StudentId};

/// The records a caller account owns, one slot per entity kind.
///
/// An account may hold several roles at once (e.g. own an organization and
/// be a registered student); the slots are independent. An account with no
/// owned records resolves to all-empty slots — resolution never fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityContext {
    pub account: AccountId,
    pub organization: Option<OrganizationId>,
    pub instructor: Option<InstructorId>,
    pub student: Option<StudentId>,
}

impl IdentityContext {
    /// Whether this account owns no records of any kind.
    pub fn is_anonymous(&self) -> bool {
        self.organization.is_none() && self.instructor.is_none() && self.student.is_none()
    }
}

/// Account → owned-record index. Leaf component: side-effect free on
/// resolution, written only by the store's creation operations.
///
/// Re-registering the same kind from the same account re-binds the slot to
/// the newest record (mapping-overwrite semantics); earlier records stay in
/// the store tables.
#[derive(Debug, Default)]
pub(crate) struct AccountIndex {
    organizations: DashMap<AccountId, OrganizationId>,
    instructors: DashMap<AccountId, InstructorId>,
    students: DashMap<AccountId, StudentId>,
}

impl AccountIndex {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn bind_organization(&self, account: &AccountId, id: OrganizationId) {
        self.organizations.insert(account.clone(), id);
    }

    pub(crate) fn bind_instructor(&self, account: &AccountId, id: InstructorId) {
        self.instructors.insert(account.clone(), id);
    }

    pub(crate) fn bind_student(&self, account: &AccountId, id: StudentId) {
        self.students.insert(account.clone(), id);
    }

    pub(crate) fn organization_of(&self, account: &AccountId) -> Option<OrganizationId> {
        self.organizations.get(account).map(|e| *e.value())
    }

    pub(crate) fn instructor_of(&self, account: &AccountId) -> Option<InstructorId> {
        self.instructors.get(account).map(|e| *e.value())
    }

    pub(crate) fn student_of(&self, account: &AccountId) -> Option<StudentId> {
        self.students.get(account).map(|e| *e.value())
    }

    pub(crate) fn resolve(&self, account: &AccountId) -> IdentityContext {
        IdentityContext {
            account: account.clone(),
            organization: self.organization_of(account),
            instructor: self.instructor_of(account),
            student: self.student_of(account),
        }
    }
}
