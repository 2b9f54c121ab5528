// Route exports
pub mod clinics;

use actix_web::{error, web, HttpRequest, HttpResponse};

use crate::models::ErrorResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1")
            .configure(clinics::configure),
    );
}

/// Handle JSON payload errors with the API error envelope
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);

    let response = HttpResponse::BadRequest().json(ErrorResponse::new("invalid json params"));
    error::InternalError::from_response(err, response).into()
}
