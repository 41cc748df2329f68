//! Error conversion glue between domain value objects and the service layer.
//!
//! The domain layer must not depend on service error types, so the
//! conversions live here.

use crate::domain::template_data::DuplicateVariable;
use crate::services::errors::ServiceError;

impl From<DuplicateVariable> for ServiceError {
    fn from(val: DuplicateVariable) -> Self {
        ServiceError::Internal(val.to_string())
    }
}
