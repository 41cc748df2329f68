//! HTTP handlers.

use actix_web::HttpResponse;
use serde_json::json;

use crate::services::ServiceError;

pub mod api;

/// Maps a workflow error onto the HTTP response returned to the caller.
pub fn service_error_response(err: &ServiceError) -> HttpResponse {
    let body = json!({ "error": err.to_string() });
    match err {
        ServiceError::Validation(_) => HttpResponse::BadRequest().json(body),
        ServiceError::NotFound(_) => HttpResponse::NotFound().json(body),
        ServiceError::TemplateAssembly(_)
        | ServiceError::Repository(_)
        | ServiceError::Internal(_) => HttpResponse::InternalServerError().json(body),
    }
}
