use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Raised by store adapters backed by an external system; the
    /// in-memory store never fails this way.
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<ValidationErrors> for RepositoryError {
    fn from(err: ValidationErrors) -> Self {
        RepositoryError::ValidationError(err.to_string())
    }
}
