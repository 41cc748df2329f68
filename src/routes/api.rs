use actix_web::{HttpResponse, Responder, post, web};
use serde_json::Value;

use crate::NotifierState;
use crate::routes::service_error_response;
use crate::services::payload::RequestPayload;
use crate::services::return_operation::notify_return_status;

/// Runs the return notification workflow for the `data` object of the body.
#[post("/v1/returns/notify")]
pub async fn api_v1_returns_notify(
    body: web::Json<Value>,
    state: web::Data<NotifierState>,
) -> impl Responder {
    let data = RequestPayload::from_value(body.into_inner()).field("data");

    match notify_return_status(
        state.repo.as_ref(),
        state.renderer.as_ref(),
        state.gateway.as_ref(),
        &data,
    ) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => {
            log::error!("Failed to process return notification: {e}");
            service_error_response(&e)
        }
    }
}
