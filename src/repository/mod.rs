//! Read-only ports onto the entity store and seller settings.

use crate::domain::client::Client;
use crate::domain::employee::Employee;
use crate::domain::seller::Seller;
use crate::domain::types::{ClientId, EmployeeId, SellerId};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use memory::InMemoryRepository;

pub trait SellerReader {
    fn get_seller_by_id(&self, id: SellerId) -> RepositoryResult<Option<Seller>>;
}

pub trait ClientReader {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
}

pub trait EmployeeReader {
    fn get_employee_by_id(&self, id: EmployeeId) -> RepositoryResult<Option<Employee>>;
}

/// Per-seller notification settings.
pub trait SellerSettingsReader {
    /// Sender address for outgoing email; empty when none is configured.
    fn get_sender_email(&self, seller_id: SellerId) -> RepositoryResult<String>;

    /// Staff addresses holding `permission` for the seller.
    fn list_emails_by_permission(
        &self,
        seller_id: SellerId,
        permission: &str,
    ) -> RepositoryResult<Vec<String>>;
}
