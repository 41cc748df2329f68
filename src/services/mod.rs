//! Return notification workflow: validation, resolution, assembly, dispatch.

pub mod dispatch;
pub mod errors;
pub mod payload;
pub mod resolver;
pub mod return_operation;
pub mod template_data;

pub use errors::{ServiceError, ServiceResult};
