//! Entity lookups that fail when a record is missing or unusable.

use std::fmt::{Display, Formatter};

use crate::domain::client::Client;
use crate::domain::employee::Employee;
use crate::domain::seller::Seller;
use crate::domain::types::{ClientId, EmployeeId, SellerId};
use crate::repository::{ClientReader, EmployeeReader, SellerReader};
use crate::services::{ServiceError, ServiceResult};

/// Role an employee plays in a return; used in lookup error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmployeeRole {
    Creator,
    Expert,
}

impl EmployeeRole {
    pub const fn label(self) -> &'static str {
        match self {
            EmployeeRole::Creator => "Creator",
            EmployeeRole::Expert => "Expert",
        }
    }
}

impl Display for EmployeeRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn resolve_seller<R>(repo: &R, seller_id: SellerId) -> ServiceResult<Seller>
where
    R: SellerReader + ?Sized,
{
    repo.get_seller_by_id(seller_id)?
        .ok_or_else(|| ServiceError::NotFound("Seller not found!".to_string()))
}

/// Fetches a customer client.
///
/// The ownership check accepts a client only when its owning seller id equals
/// the client's own id.
pub fn resolve_client<R>(repo: &R, client_id: ClientId) -> ServiceResult<Client>
where
    R: ClientReader + ?Sized,
{
    repo.get_client_by_id(client_id)?
        .filter(|client| client.is_customer() && client.seller_id.get() == client_id.get())
        .ok_or_else(|| ServiceError::NotFound("Client not found!".to_string()))
}

pub fn resolve_employee<R>(
    repo: &R,
    employee_id: EmployeeId,
    role: EmployeeRole,
) -> ServiceResult<Employee>
where
    R: EmployeeReader + ?Sized,
{
    repo.get_employee_by_id(employee_id)?
        .ok_or_else(|| ServiceError::NotFound(format!("{role} not found!")))
}
