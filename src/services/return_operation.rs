//! Notification workflow for created or changed goods returns.

use crate::domain::notification::{NotificationReport, NotificationResult};
use crate::domain::types::{ClientId, EmployeeId, NotificationType, SellerId};
use crate::notifier::NotificationGateway;
use crate::repository::{ClientReader, EmployeeReader, SellerReader, SellerSettingsReader};
use crate::services::dispatch::{
    ChannelOutcome, ClientDispatch, send_client_email, send_client_sms, send_employee_email,
};
use crate::services::payload::{RequestPayload, require_integer};
use crate::services::resolver::{EmployeeRole, resolve_client, resolve_employee, resolve_seller};
use crate::services::template_data::{AssemblyInput, assemble};
use crate::services::{ServiceError, ServiceResult};
use crate::templates::MessageRenderer;

/// Message reported when the request does not name a reseller.
pub const EMPTY_RESELLER_ID: &str = "Empty resellerId";

/// Notifies staff and, on status changes, the client about a goods return.
///
/// Returns a report even when individual channels fail. Errors are returned
/// only for invalid requests, unknown entities and broken template data;
/// a missing `resellerId` is reported inside the result instead.
pub fn notify_return_status<R, T, G>(
    repo: &R,
    renderer: &T,
    gateway: &G,
    data: &RequestPayload,
) -> ServiceResult<NotificationReport>
where
    R: SellerReader + ClientReader + EmployeeReader + SellerSettingsReader + ?Sized,
    T: MessageRenderer + ?Sized,
    G: NotificationGateway + ?Sized,
{
    let notification_type = NotificationType::from(require_integer("notificationType", data)?);

    let mut result = NotificationResult::new();

    let reseller_id = match require_integer("resellerId", data) {
        Ok(id) => SellerId::new(id),
        Err(_) => {
            result.set_error_message(EMPTY_RESELLER_ID);
            return Ok(result.to_report());
        }
    };

    let client_id = ClientId::new(require_integer("clientId", data)?);
    let creator_id = EmployeeId::new(require_integer("creatorId", data)?);
    let expert_id = EmployeeId::new(require_integer("expertId", data)?);
    let differences = data.field("differences");

    // Resolved ahead of the employees so a bad reseller or client fails fast.
    let reseller = resolve_seller(repo, reseller_id)?;
    let client = resolve_client(repo, client_id)?;

    let template_data = resolve_employee(repo, creator_id, EmployeeRole::Creator)
        .and_then(|creator| {
            let expert = resolve_employee(repo, expert_id, EmployeeRole::Expert)?;
            assemble(
                renderer,
                AssemblyInput {
                    notification_type,
                    reseller: &reseller,
                    client: &client,
                    creator: &creator,
                    expert: &expert,
                    payload: data,
                    differences: &differences,
                },
            )
        })
        .map_err(|err| {
            log::error!("Failed to assemble template data for seller {reseller_id}: {err}");
            ServiceError::template_assembly(err)
        })?;

    let email_from = repo.get_sender_email(reseller.id).unwrap_or_else(|err| {
        log::warn!("Failed to load sender email for seller {reseller_id}: {err}");
        String::new()
    });
    if email_from.trim().is_empty() {
        log::info!("Seller {reseller_id} has no sender email, skipping notifications");
        return Ok(result.to_report());
    }

    let staff_outcome = send_employee_email(
        repo,
        renderer,
        gateway,
        &reseller,
        &email_from,
        &template_data,
    );
    match staff_outcome {
        ChannelOutcome::Failed(err) => {
            log::warn!("Staff email for seller {reseller_id} failed: {err}");
            result.set_employee_notified_via_email(false);
        }
        outcome => {
            result.set_employee_notified_via_email(outcome.is_sent());
        }
    }

    let client_dispatch = ClientDispatch {
        notification_type,
        reseller: &reseller,
        client: &client,
        email_from: &email_from,
        template_data: &template_data,
        differences: &differences,
    };

    match send_client_email(renderer, gateway, &client_dispatch) {
        ChannelOutcome::Failed(err) => {
            log::warn!("Client email for client {client_id} failed: {err}");
            result.set_client_notified_via_email(false);
        }
        outcome => {
            result.set_client_notified_via_email(outcome.is_sent());
        }
    }

    // Unlike the email channels, an SMS failure is reported to the caller.
    match send_client_sms(gateway, &client_dispatch) {
        ChannelOutcome::Failed(err) => {
            log::warn!("Client SMS for client {client_id} failed: {err}");
            result
                .set_client_notified_via_sms(false)
                .set_error_message(err.to_string());
        }
        outcome => {
            result.set_client_notified_via_sms(outcome.is_sent());
        }
    }

    log::info!(
        "Return notification for seller {reseller_id}, client {client_id}: {:?}",
        result
    );

    Ok(result.to_report())
}
