//! Store backed by the directory section of the service configuration.

use std::collections::{BTreeMap, HashMap};

use validator::Validate;

use crate::domain::client::Client;
use crate::domain::employee::Employee;
use crate::domain::seller::Seller;
use crate::domain::types::{ClientId, EmployeeId, SellerId};
use crate::models::directory::DirectoryConfig;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ClientReader, EmployeeReader, SellerReader, SellerSettingsReader};

/// Permission keys are stored lower-cased; configuration sources may fold case.
#[derive(Clone, Debug, Default)]
struct SellerSettings {
    sender_email: String,
    permissions: BTreeMap<String, Vec<String>>,
}

/// Immutable lookup tables built once at startup.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRepository {
    sellers: HashMap<SellerId, Seller>,
    settings: HashMap<SellerId, SellerSettings>,
    clients: HashMap<ClientId, Client>,
    employees: HashMap<EmployeeId, Employee>,
}

impl InMemoryRepository {
    /// Validates the directory and indexes its records by id.
    pub fn new(directory: &DirectoryConfig) -> RepositoryResult<Self> {
        directory.validate()?;

        let mut repo = Self::default();

        for record in &directory.sellers {
            let seller = Seller::from(record);
            let settings = SellerSettings {
                sender_email: record.sender_email.clone().unwrap_or_default(),
                permissions: record
                    .permissions
                    .iter()
                    .map(|(permission, emails)| (permission.to_lowercase(), emails.clone()))
                    .collect(),
            };
            if repo.sellers.insert(seller.id, seller).is_some() {
                return Err(RepositoryError::ValidationError(format!(
                    "duplicate seller id {}",
                    record.id
                )));
            }
            repo.settings.insert(SellerId::new(record.id), settings);
        }

        for record in &directory.clients {
            let client = Client::from(record);
            if repo.clients.insert(client.id, client).is_some() {
                return Err(RepositoryError::ValidationError(format!(
                    "duplicate client id {}",
                    record.id
                )));
            }
        }

        for record in &directory.employees {
            let employee = Employee::from(record);
            if repo.employees.insert(employee.id, employee).is_some() {
                return Err(RepositoryError::ValidationError(format!(
                    "duplicate employee id {}",
                    record.id
                )));
            }
        }

        log::info!(
            "Loaded directory: {} sellers, {} clients, {} employees",
            repo.sellers.len(),
            repo.clients.len(),
            repo.employees.len()
        );

        Ok(repo)
    }
}

impl SellerReader for InMemoryRepository {
    fn get_seller_by_id(&self, id: SellerId) -> RepositoryResult<Option<Seller>> {
        Ok(self.sellers.get(&id).cloned())
    }
}

impl ClientReader for InMemoryRepository {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        Ok(self.clients.get(&id).cloned())
    }
}

impl EmployeeReader for InMemoryRepository {
    fn get_employee_by_id(&self, id: EmployeeId) -> RepositoryResult<Option<Employee>> {
        Ok(self.employees.get(&id).cloned())
    }
}

impl SellerSettingsReader for InMemoryRepository {
    fn get_sender_email(&self, seller_id: SellerId) -> RepositoryResult<String> {
        Ok(self
            .settings
            .get(&seller_id)
            .map(|settings| settings.sender_email.clone())
            .unwrap_or_default())
    }

    fn list_emails_by_permission(
        &self,
        seller_id: SellerId,
        permission: &str,
    ) -> RepositoryResult<Vec<String>> {
        Ok(self
            .settings
            .get(&seller_id)
            .and_then(|settings| settings.permissions.get(&permission.to_lowercase()))
            .cloned()
            .unwrap_or_default())
    }
}
