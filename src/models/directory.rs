//! Entity records loaded from configuration to back the in-memory store.

use std::collections::BTreeMap;

use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::domain::client::Client;
use crate::domain::employee::Employee;
use crate::domain::seller::Seller;
use crate::domain::types::{ClientId, ContractorType, EmployeeId, SellerId};

/// Complete set of sellers, clients and employees known to the service.
#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct DirectoryConfig {
    #[serde(default)]
    #[validate(nested)]
    pub sellers: Vec<SellerRecord>,
    #[serde(default)]
    #[validate(nested)]
    pub clients: Vec<ClientRecord>,
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct SellerRecord {
    pub id: i64,
    pub name: String,
    /// Address used as `emailFrom`; the seller sends no email when absent.
    #[validate(email)]
    pub sender_email: Option<String>,
    /// Staff recipients keyed by permission.
    #[serde(default)]
    #[validate(custom(function = "validate_recipients"))]
    pub permissions: BTreeMap<String, Vec<String>>,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct ClientRecord {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: i64,
    pub seller_id: i64,
    #[validate(email)]
    pub email: Option<String>,
    pub mobile: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EmployeeRecord {
    pub id: i64,
    pub name: String,
}

fn validate_recipients(permissions: &BTreeMap<String, Vec<String>>) -> Result<(), ValidationError> {
    if permissions
        .values()
        .flatten()
        .all(|email| email.validate_email())
    {
        Ok(())
    } else {
        Err(ValidationError::new("recipient_email"))
    }
}

impl From<&SellerRecord> for Seller {
    fn from(record: &SellerRecord) -> Self {
        Self {
            id: SellerId::new(record.id),
            name: record.name.clone(),
        }
    }
}

impl From<&ClientRecord> for Client {
    fn from(record: &ClientRecord) -> Self {
        Self {
            id: ClientId::new(record.id),
            name: record.name.clone(),
            kind: ContractorType::from(record.kind),
            seller_id: SellerId::new(record.seller_id),
            email: record.email.clone(),
            mobile: record.mobile.clone(),
        }
    }
}

impl From<&EmployeeRecord> for Employee {
    fn from(record: &EmployeeRecord) -> Self {
        Self {
            id: EmployeeId::new(record.id),
            name: record.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller(sender_email: Option<&str>, recipients: &[&str]) -> SellerRecord {
        let recipients = recipients.iter().map(|r| r.to_string()).collect();

        SellerRecord {
            id: 1,
            name: "Shop".to_string(),
            sender_email: sender_email.map(str::to_string),
            permissions: BTreeMap::from([("tsGoodsReturn".to_string(), recipients)]),
        }
    }

    #[test]
    fn valid_seller_passes() {
        let record = seller(Some("shop@example.com"), &["staff@example.com"]);

        assert!(record.validate().is_ok());
    }

    #[test]
    fn malformed_recipient_is_rejected() {
        let record = seller(None, &["not-an-email"]);

        assert!(record.validate().is_err());
    }

    #[test]
    fn malformed_client_email_fails_directory_validation() {
        let directory = DirectoryConfig {
            clients: vec![ClientRecord {
                id: 2,
                name: "Client".to_string(),
                kind: 0,
                seller_id: 2,
                email: Some("broken".to_string()),
                mobile: None,
            }],
            ..DirectoryConfig::default()
        };

        assert!(directory.validate().is_err());
    }

    #[test]
    fn client_record_into_domain() {
        let record = ClientRecord {
            id: 2,
            name: "Client".to_string(),
            kind: 1,
            seller_id: 7,
            email: None,
            mobile: Some("+100".to_string()),
        };

        let client: Client = (&record).into();

        assert_eq!(client.id, ClientId::new(2));
        assert_eq!(client.kind, ContractorType::Other(1));
        assert_eq!(client.seller_id, SellerId::new(7));
        assert_eq!(client.mobile.as_deref(), Some("+100"));
    }
}
