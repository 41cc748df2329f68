//! Outbound message shapes and the per-run notification result.

use serde::{Deserialize, Serialize};

/// Event name reported to the gateway for every return notification.
pub const CHANGE_RETURN_STATUS: &str = "changeReturnStatus";

/// Permission granting staff members a copy of return notifications.
pub const GOODS_RETURN_PERMISSION: &str = "tsGoodsReturn";

/// A single rendered email ready for the gateway.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmailMessage {
    pub email_from: String,
    pub email_to: String,
    pub subject: String,
    pub message: String,
}

/// Accumulates channel outcomes while the workflow runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationResult {
    employee_notified_via_email: bool,
    client_notified_via_email: bool,
    client_notified_via_sms: bool,
    error_message: String,
}

impl NotificationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_employee_notified_via_email(&mut self, notified: bool) -> &mut Self {
        self.employee_notified_via_email = notified;
        self
    }

    pub fn set_client_notified_via_email(&mut self, notified: bool) -> &mut Self {
        self.client_notified_via_email = notified;
        self
    }

    pub fn set_client_notified_via_sms(&mut self, notified: bool) -> &mut Self {
        self.client_notified_via_sms = notified;
        self
    }

    pub fn set_error_message(&mut self, message: impl Into<String>) -> &mut Self {
        self.error_message = message.into();
        self
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Snapshot in the wire format returned to callers.
    pub fn to_report(&self) -> NotificationReport {
        NotificationReport {
            notification_employee_by_email: self.employee_notified_via_email,
            notification_client_by_email: self.client_notified_via_email,
            notification_client_by_sms: SmsReport {
                is_sent: self.client_notified_via_sms,
                message: self.error_message.clone(),
            },
        }
    }
}

/// Response body of the return notification operation.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationReport {
    pub notification_employee_by_email: bool,
    pub notification_client_by_email: bool,
    pub notification_client_by_sms: SmsReport,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SmsReport {
    pub is_sent: bool,
    /// Holds the last workflow error; the name is kept for wire compatibility.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn default_report_serializes_to_wire_shape() {
        let report = NotificationResult::new().to_report();

        assert_eq!(
            serde_json::to_value(&report).expect("serializable"),
            json!({
                "notificationEmployeeByEmail": false,
                "notificationClientByEmail": false,
                "notificationClientBySms": { "isSent": false, "message": "" }
            })
        );
    }

    #[test]
    fn setters_are_reflected_in_report() {
        let mut result = NotificationResult::new();
        result
            .set_employee_notified_via_email(true)
            .set_client_notified_via_sms(false)
            .set_error_message("gateway down");

        let report = result.to_report();

        assert!(report.notification_employee_by_email);
        assert!(!report.notification_client_by_email);
        assert!(!report.notification_client_by_sms.is_sent);
        assert_eq!(report.notification_client_by_sms.message, "gateway down");
    }

    #[test]
    fn email_message_uses_camel_case_keys() {
        let message = EmailMessage {
            email_from: "shop@example.com".to_string(),
            email_to: "staff@example.com".to_string(),
            subject: "Subject".to_string(),
            message: "Body".to_string(),
        };

        let value = serde_json::to_value(&message).expect("serializable");

        assert_eq!(value["emailFrom"], "shop@example.com");
        assert_eq!(value["emailTo"], "staff@example.com");
    }
}
