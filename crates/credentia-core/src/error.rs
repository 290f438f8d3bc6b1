/// Core type errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("validation error: {0}")]
    ValidationError(String),

    #[error("invalid proof hash: {0}")]
    InvalidProofHash(String),
}
