//! Builders for the template variables of a return notification.

use crate::domain::client::Client;
use crate::domain::contractor::Contractor;
use crate::domain::employee::Employee;
use crate::domain::seller::Seller;
use crate::domain::template_data::TemplateData;
use crate::domain::types::{NotificationType, ReturnStatus};
use crate::services::payload::{RequestPayload, require_integer, require_non_empty_string};
use crate::services::{ServiceError, ServiceResult};
use crate::templates::{MessageRenderer, NEW_POSITION_ADDED, POSITION_STATUS_HAS_CHANGED};

pub fn creator_fields(creator: &Employee) -> TemplateData {
    TemplateData::new()
        .with("CREATOR_ID", creator.id.get())
        .with("CREATOR_NAME", creator.full_name())
}

pub fn expert_fields(expert: &Employee) -> TemplateData {
    TemplateData::new()
        .with("EXPERT_ID", expert.id.get())
        .with("EXPERT_NAME", expert.full_name())
}

pub fn client_fields(client: &Client) -> TemplateData {
    let full_name = client.full_name();
    let name = if full_name.is_empty() {
        client.name.clone()
    } else {
        full_name
    };

    TemplateData::new()
        .with("CLIENT_ID", client.id.get())
        .with("CLIENT_NAME", name)
}

/// Complaint and consumption fields copied from the request; all required.
pub fn other_fields(payload: &RequestPayload) -> ServiceResult<TemplateData> {
    let data = TemplateData::new()
        .with("COMPLAINT_ID", require_integer("complaintId", payload)?)
        .with(
            "COMPLAINT_NUMBER",
            require_non_empty_string("complaintNumber", payload)?,
        )
        .with("CONSUMPTION_ID", require_integer("consumptionId", payload)?)
        .with(
            "CONSUMPTION_NUMBER",
            require_non_empty_string("consumptionNumber", payload)?,
        )
        .with(
            "AGREEMENT_NUMBER",
            require_non_empty_string("agreementNumber", payload)?,
        )
        .with("DATE", require_non_empty_string("date", payload)?);

    Ok(data)
}

/// Human readable description of what changed, rendered in the reseller scope.
///
/// `NEW` always yields a description; `CHANGE` only when `differences` carries
/// data, in which case both status codes must be known.
pub fn differences_fields<T>(
    renderer: &T,
    notification_type: NotificationType,
    reseller: &Seller,
    differences: &RequestPayload,
) -> ServiceResult<TemplateData>
where
    T: MessageRenderer + ?Sized,
{
    match notification_type {
        NotificationType::New => {
            let empty = TemplateData::new();
            let rendered = renderer.render(NEW_POSITION_ADDED, &empty, reseller.id);
            Ok(TemplateData::new().with("DIFFERENCES", rendered))
        }
        NotificationType::Change if !differences.is_empty() => {
            let from = status_name("from", differences)?;
            let to = status_name("to", differences)?;
            let variables = TemplateData::new().with("FROM", from).with("TO", to);
            let rendered = renderer.render(POSITION_STATUS_HAS_CHANGED, &variables, reseller.id);
            Ok(TemplateData::new().with("DIFFERENCES", rendered))
        }
        _ => Ok(TemplateData::new()),
    }
}

fn status_name(field: &str, differences: &RequestPayload) -> ServiceResult<&'static str> {
    let name = ReturnStatus::name_for_code(require_integer(field, differences)?);
    if name.is_empty() {
        let message = format!("Invalid value differences.{field}");
        return Err(ServiceError::Validation(message));
    }
    Ok(name)
}

/// Inputs of [`assemble`], already resolved by the caller.
pub struct AssemblyInput<'a> {
    pub notification_type: NotificationType,
    pub reseller: &'a Seller,
    pub client: &'a Client,
    pub creator: &'a Employee,
    pub expert: &'a Employee,
    pub payload: &'a RequestPayload,
    pub differences: &'a RequestPayload,
}

/// Runs every fragment builder and merges the results in a fixed order.
pub fn assemble<T>(renderer: &T, input: AssemblyInput<'_>) -> ServiceResult<TemplateData>
where
    T: MessageRenderer + ?Sized,
{
    let mut data = creator_fields(input.creator);
    data.merge(expert_fields(input.expert))?;
    data.merge(client_fields(input.client))?;
    data.merge(other_fields(input.payload)?)?;
    let differences = differences_fields(
        renderer,
        input.notification_type,
        input.reseller,
        input.differences,
    )?;
    data.merge(differences)?;

    Ok(data)
}
