//! Domain entities and value objects of the return notification workflow.

pub mod client;
pub mod contractor;
pub mod employee;
pub mod notification;
pub mod seller;
pub mod template_data;
pub mod types;
