//! ZeroMQ publisher implementing [`NotificationGateway`].
//!
//! Every gateway call is serialized into a [`ZmqNotification`] envelope and
//! published on a PUB socket; the emailer and SMS workers subscribe on the
//! other end and perform the actual delivery.

use std::sync::Mutex;

use crate::domain::notification::EmailMessage;
use crate::domain::template_data::TemplateData;
use crate::domain::types::{ClientId, SellerId};
use crate::models::zmq::ZmqNotification;
use crate::notifier::{DispatchError, DispatchResult, NotificationGateway};

pub struct ZmqGateway {
    _context: zmq::Context,
    socket: Mutex<zmq::Socket>,
}

impl ZmqGateway {
    /// Connects a PUB socket to `endpoint` using a fresh context.
    pub fn connect(endpoint: &str) -> Result<Self, zmq::Error> {
        Self::with_context(&zmq::Context::new(), endpoint)
    }

    pub fn with_context(context: &zmq::Context, endpoint: &str) -> Result<Self, zmq::Error> {
        let socket = context.socket(zmq::PUB)?;
        socket.connect(endpoint)?;
        log::info!("Notifier publisher connected to {endpoint}");

        Ok(Self {
            _context: context.clone(),
            socket: Mutex::new(socket),
        })
    }

    fn publish(&self, notification: &ZmqNotification) -> DispatchResult {
        let payload = serde_json::to_vec(notification)
            .map_err(|e| DispatchError::InvalidPayload(format!("Failed to encode: {e}")))?;

        let socket = self
            .socket
            .lock()
            .map_err(|_| DispatchError::Transport("Notifier socket is unavailable".to_string()))?;

        socket
            .send(payload.as_slice(), 0)
            .map_err(|e| DispatchError::Transport(format!("Failed to publish notification: {e}")))
    }
}

impl NotificationGateway for ZmqGateway {
    fn send_to_employees(
        &self,
        messages: &[EmailMessage],
        seller_id: SellerId,
        event: &str,
    ) -> DispatchResult {
        self.publish(&ZmqNotification::EmployeeEmail {
            seller_id: seller_id.get(),
            event: event.to_string(),
            messages: messages.to_vec(),
        })
    }

    fn send_email_to_client(
        &self,
        messages: &[EmailMessage],
        seller_id: SellerId,
        client_id: ClientId,
        event: &str,
        new_status: i64,
    ) -> DispatchResult {
        self.publish(&ZmqNotification::ClientEmail {
            seller_id: seller_id.get(),
            client_id: client_id.get(),
            event: event.to_string(),
            new_status,
            messages: messages.to_vec(),
        })
    }

    fn send_sms_to_client(
        &self,
        seller_id: SellerId,
        client_id: ClientId,
        event: &str,
        new_status: i64,
        template_data: &TemplateData,
    ) -> DispatchResult {
        self.publish(&ZmqNotification::client_sms(
            seller_id.get(),
            client_id.get(),
            event,
            new_status,
            template_data,
        ))
    }
}
