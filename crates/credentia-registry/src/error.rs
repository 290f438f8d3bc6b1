use credentia_core::CoreError;

/// Registry operation failures.
///
/// Every failure is detected before any state is written, so a returned
/// error always means the store is unchanged.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A name, contact, or proof field is empty or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The caller does not own the entity the operation requires.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// A referenced identifier does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The proof hash is already bound to an issued certificate.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl From<CoreError> for RegistryError {
    fn from(err: CoreError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
