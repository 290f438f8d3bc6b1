use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use credentia_core::{
    AccountId, CertificateId, EntityKind, InstructorId, OrganizationId, ProgramId, ProofHash,
    RegistryConfig, StudentId,
};

use crate::authz::EntityRef;
use crate::error::RegistryError;
use crate::identity::{AccountIndex, IdentityContext};
use crate::records::{Certificate, Instructor, Organization, Program, Student};

/// The registry store: sole owner of all entity records and indices.
///
/// Mutations take `&self`; tables are `DashMap`s and counters are atomics,
/// so individual touches are safe, but the hosting runtime is expected to
/// serialize state-changing calls (single writer at a time). Every
/// operation validates and authorizes before its first write, so a failed
/// call never leaves partial state behind.
pub struct Registry {
    config: RegistryConfig,

    organizations: DashMap<OrganizationId, Organization>,
    programs: DashMap<ProgramId, Program>,
    instructors: DashMap<InstructorId, Instructor>,
    students: DashMap<StudentId, Student>,
    certificates: DashMap<CertificateId, Certificate>,

    /// Caller account → owned records.
    accounts: AccountIndex,
    /// Proof hash → certificate, for O(1) verification lookup.
    proof_index: DashMap<String, CertificateId>,
    /// Holder account → certificates in issuance order.
    holder_index: DashMap<AccountId, Vec<CertificateId>>,
    /// (name, contact) → instructor, so program enrollment reuses records.
    instructor_index: DashMap<(String, String), InstructorId>,
    /// (name, contact) → student, same reuse rule.
    student_index: DashMap<(String, String), StudentId>,

    // Per-kind id counters, starting at 1. Only advanced after all
    // preconditions of a creation have passed.
    organization_seq: AtomicU64,
    program_seq: AtomicU64,
    instructor_seq: AtomicU64,
    student_seq: AtomicU64,
    certificate_seq: AtomicU64,
}

impl Registry {
    /// Create an empty registry with default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with the given configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            organizations: DashMap::new(),
            programs: DashMap::new(),
            instructors: DashMap::new(),
            students: DashMap::new(),
            certificates: DashMap::new(),
            accounts: AccountIndex::new(),
            proof_index: DashMap::new(),
            holder_index: DashMap::new(),
            instructor_index: DashMap::new(),
            student_index: DashMap::new(),
            organization_seq: AtomicU64::new(0),
            program_seq: AtomicU64::new(0),
            instructor_seq: AtomicU64::new(0),
            student_seq: AtomicU64::new(0),
            certificate_seq: AtomicU64::new(0),
        }
    }

    /// The registry's configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn next_id(seq: &AtomicU64) -> u64 {
        seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn validate_field(&self, field: &str, value: &str, max: usize) -> Result<(), RegistryError> {
        if value.trim().is_empty() {
            return Err(RegistryError::InvalidInput(format!(
                "{} must not be empty",
                field
            )));
        }
        if value.len() > max {
            return Err(RegistryError::InvalidInput(format!(
                "{} exceeds {} bytes",
                field, max
            )));
        }
        Ok(())
    }

    fn validate_name_contact(&self, name: &str, contact: &str) -> Result<(), RegistryError> {
        self.validate_field("name", name, self.config.max_name_len)?;
        self.validate_field("contact", contact, self.config.max_contact_len)
    }

    // =====================================================================
    // Identity resolution
    // =====================================================================

    /// Resolve a caller account to the records it owns. Never fails;
    /// unknown accounts resolve to empty slots.
    pub fn resolve_caller(&self, account: &AccountId) -> IdentityContext {
        self.accounts.resolve(account)
    }

    // =====================================================================
    // Creation operations
    // =====================================================================

    /// Create an organization owned by the caller.
    pub fn create_organization(
        &self,
        caller: &AccountId,
        name: &str,
        contact: &str,
    ) -> Result<OrganizationId, RegistryError> {
        self.validate_name_contact(name, contact)?;

        let id = OrganizationId(Self::next_id(&self.organization_seq));
        self.organizations.insert(
            id,
            Organization {
                id,
                name: name.to_string(),
                contact: contact.to_string(),
                owner: caller.clone(),
                created_at: Utc::now(),
            },
        );
        self.accounts.bind_organization(caller, id);

        tracing::info!(organization = %id, owner = %caller, name, "organization created");
        Ok(id)
    }

    /// Create a program under the caller's organization.
    pub fn create_program(
        &self,
        caller: &AccountId,
        name: &str,
    ) -> Result<ProgramId, RegistryError> {
        let organization = self.accounts.organization_of(caller).ok_or_else(|| {
            RegistryError::Unauthorized(format!("account {} owns no organization", caller))
        })?;
        self.validate_field("name", name, self.config.max_name_len)?;

        let id = ProgramId(Self::next_id(&self.program_seq));
        self.programs.insert(
            id,
            Program {
                id,
                name: name.to_string(),
                organization,
                instructors: Vec::new(),
                students: Vec::new(),
                created_at: Utc::now(),
            },
        );

        tracing::info!(program = %id, organization = %organization, name, "program created");
        Ok(id)
    }

    /// Register the caller as an instructor.
    pub fn create_instructor(
        &self,
        caller: &AccountId,
        name: &str,
        contact: &str,
    ) -> Result<InstructorId, RegistryError> {
        self.validate_name_contact(name, contact)?;

        let id = self.mint_instructor(caller, name, contact);
        self.accounts.bind_instructor(caller, id);

        tracing::info!(instructor = %id, owner = %caller, name, "instructor created");
        Ok(id)
    }

    /// Register the caller as a student.
    pub fn create_student(
        &self,
        caller: &AccountId,
        name: &str,
        contact: &str,
    ) -> Result<StudentId, RegistryError> {
        self.validate_name_contact(name, contact)?;

        let id = self.mint_student(caller, name, contact);
        self.accounts.bind_student(caller, id);

        tracing::info!(student = %id, owner = %caller, name, "student created");
        Ok(id)
    }

    fn mint_instructor(&self, owner: &AccountId, name: &str, contact: &str) -> InstructorId {
        let id = InstructorId(Self::next_id(&self.instructor_seq));
        self.instructors.insert(
            id,
            Instructor {
                id,
                name: name.to_string(),
                contact: contact.to_string(),
                owner: owner.clone(),
                created_at: Utc::now(),
            },
        );
        self.instructor_index
            .insert((name.to_string(), contact.to_string()), id);
        id
    }

    fn mint_student(&self, owner: &AccountId, name: &str, contact: &str) -> StudentId {
        let id = StudentId(Self::next_id(&self.student_seq));
        self.students.insert(
            id,
            Student {
                id,
                name: name.to_string(),
                contact: contact.to_string(),
                owner: owner.clone(),
                created_at: Utc::now(),
            },
        );
        self.student_index
            .insert((name.to_string(), contact.to_string()), id);
        id
    }

    // =====================================================================
    // Program membership
    // =====================================================================

    /// Enroll an instructor (registered on the fly, or reused if a record
    /// with this name/contact already exists) into a program owned by the
    /// caller's organization. Idempotent: enrolling the same identity
    /// twice keeps a single membership entry.
    pub fn add_instructor_to_program(
        &self,
        caller: &AccountId,
        program_id: ProgramId,
        name: &str,
        contact: &str,
    ) -> Result<InstructorId, RegistryError> {
        self.validate_name_contact(name, contact)?;
        self.require_program_owned(caller, program_id)?;

        let key = (name.to_string(), contact.to_string());
        let instructor_id = match self.instructor_index.get(&key) {
            Some(existing) => {
                let id = *existing.value();
                tracing::debug!(instructor = %id, name, "reusing existing instructor record");
                id
            }
            None => self.mint_instructor(caller, name, contact),
        };

        let mut program = self
            .programs
            .get_mut(&program_id)
            .ok_or_else(|| RegistryError::NotFound(format!("program {}", program_id)))?;
        if !program.has_instructor(instructor_id) {
            program.instructors.push(instructor_id);
            tracing::info!(program = %program_id, instructor = %instructor_id, "instructor enrolled");
        }
        Ok(instructor_id)
    }

    /// Enroll a student into a program owned by the caller's organization.
    /// Symmetric to [`Self::add_instructor_to_program`].
    pub fn add_student_to_program(
        &self,
        caller: &AccountId,
        program_id: ProgramId,
        name: &str,
        contact: &str,
    ) -> Result<StudentId, RegistryError> {
        self.validate_name_contact(name, contact)?;
        self.require_program_owned(caller, program_id)?;

        let key = (name.to_string(), contact.to_string());
        let student_id = match self.student_index.get(&key) {
            Some(existing) => {
                let id = *existing.value();
                tracing::debug!(student = %id, name, "reusing existing student record");
                id
            }
            None => self.mint_student(caller, name, contact),
        };

        let mut program = self
            .programs
            .get_mut(&program_id)
            .ok_or_else(|| RegistryError::NotFound(format!("program {}", program_id)))?;
        if !program.has_student(student_id) {
            program.students.push(student_id);
            tracing::info!(program = %program_id, student = %student_id, "student enrolled");
        }
        Ok(student_id)
    }

    /// An unknown program is `NotFound`; a program owned by someone else's
    /// organization is `Unauthorized`. Existence is checked first.
    fn require_program_owned(
        &self,
        caller: &AccountId,
        program_id: ProgramId,
    ) -> Result<(), RegistryError> {
        if !self.programs.contains_key(&program_id) {
            return Err(RegistryError::NotFound(format!("program {}", program_id)));
        }
        if !self.authorize(caller, &EntityRef::Program(program_id)) {
            return Err(RegistryError::Unauthorized(format!(
                "account {} does not own program {}",
                caller, program_id
            )));
        }
        Ok(())
    }

    // =====================================================================
    // Certificate issuance
    // =====================================================================

    /// Issue a certificate from the caller's organization to a holder
    /// account. The proof hash must be globally unique. The holder need
    /// not have a student record yet; certificates are recorded against
    /// the raw account and resolved to a student lazily.
    pub fn issue_certificate(
        &self,
        caller: &AccountId,
        proof_hash: &str,
        holder: &AccountId,
    ) -> Result<CertificateId, RegistryError> {
        let issuer = self.accounts.organization_of(caller).ok_or_else(|| {
            RegistryError::Unauthorized(format!("account {} owns no organization", caller))
        })?;
        self.validate_field("proof hash", proof_hash, self.config.max_proof_len)?;
        let proof = ProofHash::new(proof_hash)?;

        if self.proof_index.contains_key(proof.as_str()) {
            return Err(RegistryError::Conflict(format!(
                "proof hash {} already issued",
                proof
            )));
        }

        let id = CertificateId(Self::next_id(&self.certificate_seq));
        self.certificates.insert(
            id,
            Certificate {
                id,
                proof_hash: proof.clone(),
                issuer,
                holder: holder.clone(),
                issued_at: Utc::now(),
            },
        );
        self.proof_index.insert(proof.as_str().to_string(), id);
        self.holder_index
            .entry(holder.clone())
            .or_default()
            .push(id);

        tracing::info!(certificate = %id, issuer = %issuer, holder = %holder, "certificate issued");
        Ok(id)
    }

    // =====================================================================
    // Queries
    // =====================================================================

    /// Programs owned by the caller's organization, in creation order.
    /// Empty when the caller owns no organization or no programs.
    pub fn my_programs(&self, caller: &AccountId) -> Vec<Program> {
        let Some(organization) = self.accounts.organization_of(caller) else {
            return Vec::new();
        };
        let mut programs: Vec<Program> = self
            .programs
            .iter()
            .filter(|entry| entry.value().organization == organization)
            .map(|entry| entry.value().clone())
            .collect();
        programs.sort_by_key(|p| p.id);
        programs
    }

    /// Instructors enrolled in a program, in enrollment order.
    pub fn instructors_by_program(
        &self,
        program_id: ProgramId,
    ) -> Result<Vec<Instructor>, RegistryError> {
        let member_ids = self
            .programs
            .get(&program_id)
            .map(|entry| entry.instructors.clone())
            .ok_or_else(|| RegistryError::NotFound(format!("program {}", program_id)))?;
        Ok(member_ids
            .iter()
            .filter_map(|id| self.instructor(*id))
            .collect())
    }

    /// Students enrolled in a program, in enrollment order.
    pub fn students_by_program(
        &self,
        program_id: ProgramId,
    ) -> Result<Vec<Student>, RegistryError> {
        let member_ids = self
            .programs
            .get(&program_id)
            .map(|entry| entry.students.clone())
            .ok_or_else(|| RegistryError::NotFound(format!("program {}", program_id)))?;
        Ok(member_ids.iter().filter_map(|id| self.student(*id)).collect())
    }

    /// Certificates held by an account, in issuance order. Empty for an
    /// account that holds none.
    pub fn certificates_by_student(&self, holder: &AccountId) -> Vec<Certificate> {
        let Some(ids) = self.holder_index.get(holder).map(|e| e.value().clone()) else {
            return Vec::new();
        };
        ids.iter().filter_map(|id| self.certificate(*id)).collect()
    }

    /// Certificates held by the caller. Alias of
    /// [`Self::certificates_by_student`] scoped to the caller's account.
    pub fn my_certificates(&self, caller: &AccountId) -> Vec<Certificate> {
        self.certificates_by_student(caller)
    }

    /// The student record a holder account resolves to, if one was ever
    /// registered. Best-effort: issuance does not require it.
    pub fn holder_student(&self, holder: &AccountId) -> Option<Student> {
        self.accounts.student_of(holder).and_then(|id| self.student(id))
    }

    /// Look up an organization record.
    pub fn organization(&self, id: OrganizationId) -> Option<Organization> {
        self.organizations.get(&id).map(|e| e.value().clone())
    }

    /// Look up a program record.
    pub fn program(&self, id: ProgramId) -> Option<Program> {
        self.programs.get(&id).map(|e| e.value().clone())
    }

    /// Look up an instructor record.
    pub fn instructor(&self, id: InstructorId) -> Option<Instructor> {
        self.instructors.get(&id).map(|e| e.value().clone())
    }

    /// Look up a student record.
    pub fn student(&self, id: StudentId) -> Option<Student> {
        self.students.get(&id).map(|e| e.value().clone())
    }

    /// Look up a certificate record.
    pub fn certificate(&self, id: CertificateId) -> Option<Certificate> {
        self.certificates.get(&id).map(|e| e.value().clone())
    }

    /// Look up a certificate by its proof hash.
    pub fn certificate_by_proof(&self, proof_hash: &str) -> Option<Certificate> {
        self.proof_index
            .get(proof_hash)
            .and_then(|entry| self.certificate(*entry.value()))
    }

    /// Number of organizations ever created.
    pub fn organization_count(&self) -> usize {
        self.organizations.len()
    }

    /// Number of programs ever created.
    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    /// Number of instructors ever created.
    pub fn instructor_count(&self) -> usize {
        self.instructors.len()
    }

    /// Number of students ever created.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Number of certificates ever issued.
    pub fn certificate_count(&self) -> usize {
        self.certificates.len()
    }

    /// Number of records of a kind ever created.
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Organization => self.organization_count(),
            EntityKind::Program => self.program_count(),
            EntityKind::Instructor => self.instructor_count(),
            EntityKind::Student => self.student_count(),
            EntityKind::Certificate => self.certificate_count(),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
