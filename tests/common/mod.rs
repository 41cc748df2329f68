//! Recording fakes for the workflow collaborators.
#![allow(dead_code)]

use std::sync::Mutex;

use pushkind_returns::domain::client::Client;
use pushkind_returns::domain::employee::Employee;
use pushkind_returns::domain::notification::EmailMessage;
use pushkind_returns::domain::seller::Seller;
use pushkind_returns::domain::template_data::TemplateData;
use pushkind_returns::domain::types::{ClientId, ContractorType, EmployeeId, SellerId};
use pushkind_returns::notifier::{DispatchError, DispatchResult, NotificationGateway};
use pushkind_returns::repository::errors::RepositoryResult;
use pushkind_returns::repository::{
    ClientReader, EmployeeReader, SellerReader, SellerSettingsReader,
};
use pushkind_returns::templates::MessageRenderer;
use serde_json::{Value, json};

pub const SELLER_ID: i64 = 5;

/// Store with one seller, one customer client and two employees.
pub struct FakeStore {
    pub sellers: Vec<Seller>,
    pub clients: Vec<Client>,
    pub employees: Vec<Employee>,
    pub sender_email: String,
    pub recipients: Vec<String>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            sellers: vec![Seller {
                id: SellerId::new(SELLER_ID),
                name: "Shop".to_string(),
            }],
            clients: vec![customer(Some("client@example.com"), Some("+79990000000"))],
            employees: vec![
                Employee {
                    id: EmployeeId::new(11),
                    name: "Ann".to_string(),
                },
                Employee {
                    id: EmployeeId::new(12),
                    name: "Bob".to_string(),
                },
            ],
            sender_email: "shop@example.com".to_string(),
            recipients: vec![
                "staff1@example.com".to_string(),
                "staff2@example.com".to_string(),
            ],
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.clients = vec![client];
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

/// Customer whose owning seller id equals its own id, as resolution requires.
pub fn customer(email: Option<&str>, mobile: Option<&str>) -> Client {
    Client {
        id: ClientId::new(SELLER_ID),
        name: "Acme".to_string(),
        kind: ContractorType::Customer,
        seller_id: SellerId::new(SELLER_ID),
        email: email.map(str::to_string),
        mobile: mobile.map(str::to_string),
    }
}

impl SellerReader for FakeStore {
    fn get_seller_by_id(&self, id: SellerId) -> RepositoryResult<Option<Seller>> {
        self.record(format!("seller:{id}"));
        Ok(self.sellers.iter().find(|s| s.id == id).cloned())
    }
}

impl ClientReader for FakeStore {
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        self.record(format!("client:{id}"));
        Ok(self.clients.iter().find(|c| c.id == id).cloned())
    }
}

impl EmployeeReader for FakeStore {
    fn get_employee_by_id(&self, id: EmployeeId) -> RepositoryResult<Option<Employee>> {
        self.record(format!("employee:{id}"));
        Ok(self.employees.iter().find(|e| e.id == id).cloned())
    }
}

impl SellerSettingsReader for FakeStore {
    fn get_sender_email(&self, seller_id: SellerId) -> RepositoryResult<String> {
        self.record(format!("sender:{seller_id}"));
        Ok(self.sender_email.clone())
    }

    fn list_emails_by_permission(
        &self,
        seller_id: SellerId,
        permission: &str,
    ) -> RepositoryResult<Vec<String>> {
        self.record(format!("permission:{seller_id}:{permission}"));
        Ok(self.recipients.clone())
    }
}

/// Renders `key@seller` and remembers the variables of every call.
#[derive(Default)]
pub struct FakeRenderer {
    pub calls: Mutex<Vec<(String, TemplateData, SellerId)>>,
}

impl FakeRenderer {
    pub fn variables_for(&self, key: &str) -> Option<TemplateData> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|(k, _, _)| k == key)
            .map(|(_, vars, _)| vars.clone())
    }

    pub fn keys(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(k, _, _)| k.clone())
            .collect()
    }
}

impl MessageRenderer for FakeRenderer {
    fn render(&self, template_key: &str, variables: &TemplateData, seller_id: SellerId) -> String {
        self.calls
            .lock()
            .unwrap()
            .push((template_key.to_string(), variables.clone(), seller_id));
        format!("{template_key}@{seller_id}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    Employees(Vec<EmailMessage>),
    ClientEmail(Vec<EmailMessage>, i64),
    ClientSms(i64, TemplateData),
}

/// Gateway that records calls and fails the channels it is told to.
#[derive(Default)]
pub struct FakeGateway {
    pub fail_employees: bool,
    pub fail_client_email: bool,
    pub fail_client_sms: bool,
    pub calls: Mutex<Vec<GatewayCall>>,
}

impl FakeGateway {
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    fn outcome(&self, call: GatewayCall, fail: bool, channel: &str) -> DispatchResult {
        self.calls.lock().unwrap().push(call);
        if fail {
            Err(DispatchError::Transport(format!("{channel} unavailable")))
        } else {
            Ok(())
        }
    }
}

impl NotificationGateway for FakeGateway {
    fn send_to_employees(
        &self,
        messages: &[EmailMessage],
        _seller_id: SellerId,
        _event: &str,
    ) -> DispatchResult {
        self.outcome(
            GatewayCall::Employees(messages.to_vec()),
            self.fail_employees,
            "staff email",
        )
    }

    fn send_email_to_client(
        &self,
        messages: &[EmailMessage],
        _seller_id: SellerId,
        _client_id: ClientId,
        _event: &str,
        new_status: i64,
    ) -> DispatchResult {
        self.outcome(
            GatewayCall::ClientEmail(messages.to_vec(), new_status),
            self.fail_client_email,
            "client email",
        )
    }

    fn send_sms_to_client(
        &self,
        _seller_id: SellerId,
        _client_id: ClientId,
        _event: &str,
        new_status: i64,
        template_data: &TemplateData,
    ) -> DispatchResult {
        self.outcome(
            GatewayCall::ClientSms(new_status, template_data.clone()),
            self.fail_client_sms,
            "client sms",
        )
    }
}

/// Complete request body for the given notification type and differences.
pub fn request(notification_type: i64, differences: Value) -> Value {
    json!({
        "notificationType": notification_type,
        "resellerId": SELLER_ID,
        "clientId": SELLER_ID,
        "creatorId": 11,
        "expertId": 12,
        "differences": differences,
        "complaintId": "100",
        "complaintNumber": "C-100",
        "consumptionId": 200,
        "consumptionNumber": "S-200",
        "agreementNumber": "A-300",
        "date": "2024-05-01"
    })
}
