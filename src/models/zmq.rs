use serde::{Deserialize, Serialize};

use crate::domain::notification::EmailMessage;
use crate::domain::template_data::TemplateData;

/// Envelope published on the notifier socket, one per gateway call.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "channel", rename_all = "snake_case")]
pub enum ZmqNotification {
    EmployeeEmail {
        seller_id: i64,
        event: String,
        messages: Vec<EmailMessage>,
    },
    ClientEmail {
        seller_id: i64,
        client_id: i64,
        event: String,
        new_status: i64,
        messages: Vec<EmailMessage>,
    },
    ClientSms {
        seller_id: i64,
        client_id: i64,
        event: String,
        new_status: i64,
        template_data: serde_json::Map<String, serde_json::Value>,
    },
}

impl ZmqNotification {
    pub fn client_sms(
        seller_id: i64,
        client_id: i64,
        event: &str,
        new_status: i64,
        template_data: &TemplateData,
    ) -> Self {
        ZmqNotification::ClientSms {
            seller_id,
            client_id,
            event: event.to_string(),
            new_status,
            template_data: template_data.as_map().clone(),
        }
    }
}
