//! Port onto the outbound notification gateway.

use thiserror::Error;

use crate::domain::notification::EmailMessage;
use crate::domain::template_data::TemplateData;
use crate::domain::types::{ClientId, SellerId};

#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
#[cfg(feature = "server")]
pub mod zmq_gateway;

/// Failure of a single notification channel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The gateway refused or could not deliver the notification.
    #[error("{0}")]
    Transport(String),
    /// The channel could not build its payload from the request.
    #[error("{0}")]
    InvalidPayload(String),
}

pub type DispatchResult = Result<(), DispatchError>;

/// Delivers rendered notifications to staff and clients.
pub trait NotificationGateway {
    fn send_to_employees(
        &self,
        messages: &[EmailMessage],
        seller_id: SellerId,
        event: &str,
    ) -> DispatchResult;

    fn send_email_to_client(
        &self,
        messages: &[EmailMessage],
        seller_id: SellerId,
        client_id: ClientId,
        event: &str,
        new_status: i64,
    ) -> DispatchResult;

    fn send_sms_to_client(
        &self,
        seller_id: SellerId,
        client_id: ClientId,
        event: &str,
        new_status: i64,
        template_data: &TemplateData,
    ) -> DispatchResult;
}
