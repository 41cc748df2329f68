//! Port onto the message rendering/translation service.

use crate::domain::template_data::TemplateData;
use crate::domain::types::SellerId;

#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
#[cfg(feature = "server")]
pub mod tera_renderer;

pub const NEW_POSITION_ADDED: &str = "NewPositionAdded";
pub const POSITION_STATUS_HAS_CHANGED: &str = "PositionStatusHasChanged";
pub const EMPLOYEE_EMAIL_SUBJECT: &str = "complaintEmployeeEmailSubject";
pub const EMPLOYEE_EMAIL_BODY: &str = "complaintEmployeeEmailBody";
pub const CLIENT_EMAIL_SUBJECT: &str = "complaintClientEmailSubject";
pub const CLIENT_EMAIL_BODY: &str = "complaintClientEmailBody";

/// Produces localized text for a template key in the scope of a seller.
///
/// Rendering never fails from the caller's point of view: implementations
/// fall back to some text (typically the key) and report problems themselves.
pub trait MessageRenderer {
    fn render(&self, template_key: &str, variables: &TemplateData, seller_id: SellerId) -> String;
}
