//! Per-channel notification senders.
//!
//! Each sender reports an explicit [`ChannelOutcome`]; deciding what to do
//! with a failure is left to the workflow.

use crate::domain::client::Client;
use crate::domain::notification::{CHANGE_RETURN_STATUS, EmailMessage, GOODS_RETURN_PERMISSION};
use crate::domain::seller::Seller;
use crate::domain::template_data::TemplateData;
use crate::domain::types::NotificationType;
use crate::notifier::{DispatchError, DispatchResult, NotificationGateway};
use crate::repository::SellerSettingsReader;
use crate::services::payload::{RequestPayload, require_integer};
use crate::templates::{
    CLIENT_EMAIL_BODY, CLIENT_EMAIL_SUBJECT, EMPLOYEE_EMAIL_BODY, EMPLOYEE_EMAIL_SUBJECT,
    MessageRenderer,
};

/// Result of attempting one notification channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelOutcome {
    Sent,
    /// The channel was not eligible or had nobody to notify.
    Skipped,
    Failed(DispatchError),
}

impl ChannelOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, ChannelOutcome::Sent)
    }
}

impl From<DispatchResult> for ChannelOutcome {
    fn from(result: DispatchResult) -> Self {
        match result {
            Ok(()) => ChannelOutcome::Sent,
            Err(err) => ChannelOutcome::Failed(err),
        }
    }
}

/// Everything the client channels need to know about the current return.
pub struct ClientDispatch<'a> {
    pub notification_type: NotificationType,
    pub reseller: &'a Seller,
    pub client: &'a Client,
    pub email_from: &'a str,
    pub template_data: &'a TemplateData,
    pub differences: &'a RequestPayload,
}

/// Emails every staff member holding the goods-return permission.
///
/// Subject and body are rendered from the assembled template data, not from
/// the raw request fields.
pub fn send_employee_email<R, T, G>(
    repo: &R,
    renderer: &T,
    gateway: &G,
    reseller: &Seller,
    email_from: &str,
    template_data: &TemplateData,
) -> ChannelOutcome
where
    R: SellerSettingsReader + ?Sized,
    T: MessageRenderer + ?Sized,
    G: NotificationGateway + ?Sized,
{
    let recipients = match repo.list_emails_by_permission(reseller.id, GOODS_RETURN_PERMISSION) {
        Ok(recipients) => recipients,
        Err(err) => {
            let reason = format!("Failed to load staff recipients: {err}");
            return ChannelOutcome::Failed(DispatchError::Transport(reason));
        }
    };

    if recipients.is_empty() {
        log::debug!("No staff recipients for seller {}", reseller.id);
        return ChannelOutcome::Skipped;
    }

    let subject = renderer.render(EMPLOYEE_EMAIL_SUBJECT, template_data, reseller.id);
    let message = renderer.render(EMPLOYEE_EMAIL_BODY, template_data, reseller.id);

    let messages: Vec<EmailMessage> = recipients
        .into_iter()
        .map(|email_to| EmailMessage {
            email_from: email_from.to_string(),
            email_to,
            subject: subject.clone(),
            message: message.clone(),
        })
        .collect();

    gateway
        .send_to_employees(&messages, reseller.id, CHANGE_RETURN_STATUS)
        .into()
}

/// Emails the client about a status change.
pub fn send_client_email<T, G>(
    renderer: &T,
    gateway: &G,
    dispatch: &ClientDispatch<'_>,
) -> ChannelOutcome
where
    T: MessageRenderer + ?Sized,
    G: NotificationGateway + ?Sized,
{
    if dispatch.notification_type != NotificationType::Change
        || !dispatch.client.needs_email_notification()
        || dispatch.email_from.trim().is_empty()
    {
        log::debug!("Client email skipped for client {}", dispatch.client.id);
        return ChannelOutcome::Skipped;
    }

    let reseller_id = dispatch.reseller.id;
    let subject = renderer.render(CLIENT_EMAIL_SUBJECT, dispatch.template_data, reseller_id);
    let message = renderer.render(CLIENT_EMAIL_BODY, dispatch.template_data, reseller_id);

    let new_status = match new_status(dispatch.differences) {
        Ok(status) => status,
        Err(err) => return ChannelOutcome::Failed(err),
    };

    let messages = [EmailMessage {
        email_from: dispatch.email_from.to_string(),
        email_to: dispatch.client.email.clone().unwrap_or_default(),
        subject,
        message,
    }];

    gateway
        .send_email_to_client(
            &messages,
            reseller_id,
            dispatch.client.id,
            CHANGE_RETURN_STATUS,
            new_status,
        )
        .into()
}

/// Texts the client about a status change, passing the raw template data.
pub fn send_client_sms<G>(gateway: &G, dispatch: &ClientDispatch<'_>) -> ChannelOutcome
where
    G: NotificationGateway + ?Sized,
{
    if dispatch.notification_type != NotificationType::Change
        || !dispatch.client.needs_sms_notification()
    {
        log::debug!("Client SMS skipped for client {}", dispatch.client.id);
        return ChannelOutcome::Skipped;
    }

    let new_status = match new_status(dispatch.differences) {
        Ok(status) => status,
        Err(err) => return ChannelOutcome::Failed(err),
    };

    gateway
        .send_sms_to_client(
            dispatch.reseller.id,
            dispatch.client.id,
            CHANGE_RETURN_STATUS,
            new_status,
            dispatch.template_data,
        )
        .into()
}

fn new_status(differences: &RequestPayload) -> Result<i64, DispatchError> {
    require_integer("to", differences).map_err(|e| DispatchError::InvalidPayload(e.to_string()))
}
