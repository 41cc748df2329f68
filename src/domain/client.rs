use serde::{Deserialize, Serialize};

use crate::domain::contractor::Contractor;
use crate::domain::types::{ClientId, ContractorType, SellerId};

/// Counterparty of a return; receives email and SMS notifications.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: ContractorType,
    /// Seller owning this client record.
    pub seller_id: SellerId,
    pub email: Option<String>,
    pub mobile: Option<String>,
}

impl Client {
    pub fn is_customer(&self) -> bool {
        self.kind == ContractorType::Customer
    }

    /// True when a non-blank email address is on file.
    pub fn needs_email_notification(&self) -> bool {
        self.email
            .as_deref()
            .is_some_and(|email| !email.trim().is_empty())
    }

    /// True when a non-blank mobile number is on file.
    pub fn needs_sms_notification(&self) -> bool {
        self.mobile
            .as_deref()
            .is_some_and(|mobile| !mobile.trim().is_empty())
    }
}

impl Contractor for Client {
    fn id(&self) -> i64 {
        self.id.get()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_client() -> Client {
        Client {
            id: ClientId::new(5),
            name: "Acme".to_string(),
            kind: ContractorType::Customer,
            seller_id: SellerId::new(5),
            email: Some("acme@example.com".to_string()),
            mobile: Some("+79990000000".to_string()),
        }
    }

    #[test]
    fn blank_contacts_do_not_need_notification() {
        let client = Client {
            email: Some("   ".to_string()),
            mobile: None,
            ..sample_client()
        };

        assert!(!client.needs_email_notification());
        assert!(!client.needs_sms_notification());
    }

    #[test]
    fn filled_contacts_need_notification() {
        let client = sample_client();

        assert!(client.needs_email_notification());
        assert!(client.needs_sms_notification());
        assert!(client.is_customer());
    }

    #[test]
    fn type_field_deserializes_from_code() {
        let client: Client = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Shop",
            "type": 1,
            "seller_id": 3,
            "email": null,
            "mobile": null
        }))
        .expect("valid client json");

        assert_eq!(client.kind, ContractorType::Other(1));
        assert!(!client.is_customer());
    }
}
