use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Failures surfaced by the return notification workflow.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required request field is missing/blank or a coded value is unknown.
    #[error("{0}")]
    Validation(String),

    /// An entity is missing or violates a domain constraint.
    #[error("{0}")]
    NotFound(String),

    /// Template variables could not be assembled; the cause stays internal.
    #[error("Template Data is wrong!")]
    TemplateAssembly(#[source] Box<ServiceError>),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn template_assembly(cause: ServiceError) -> Self {
        ServiceError::TemplateAssembly(Box::new(cause))
    }
}
