//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::client::Client;
use crate::domain::employee::Employee;
use crate::domain::seller::Seller;
use crate::domain::types::{ClientId, EmployeeId, SellerId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientReader, EmployeeReader, SellerReader, SellerSettingsReader};

mock! {
    pub Repository {}

    impl SellerReader for Repository {
        fn get_seller_by_id(&self, id: SellerId) -> RepositoryResult<Option<Seller>>;
    }

    impl ClientReader for Repository {
        fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    }

    impl EmployeeReader for Repository {
        fn get_employee_by_id(&self, id: EmployeeId) -> RepositoryResult<Option<Employee>>;
    }

    impl SellerSettingsReader for Repository {
        fn get_sender_email(&self, seller_id: SellerId) -> RepositoryResult<String>;
        fn list_emails_by_permission(
            &self,
            seller_id: SellerId,
            permission: &str,
        ) -> RepositoryResult<Vec<String>>;
    }
}
