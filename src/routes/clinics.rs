use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::filter_clinics;
use crate::models::{ErrorResponse, HealthResponse, SearchParams};
use crate::services::DataFetcher;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn DataFetcher>,
}

/// Configure all clinic-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/clinics", web::get().to(get_all_clinics))
        .route("/clinics/search", web::post().to(search));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List all clinics endpoint
///
/// GET /v1/clinics
///
/// Returns the merged records from both feeds; 200 with an empty array when
/// no feed contributed any records.
async fn get_all_clinics(state: web::Data<AppState>) -> impl Responder {
    match state.fetcher.get_clinic_data().await {
        Ok(clinics) => {
            tracing::debug!("Returning {} clinics", clinics.len());
            HttpResponse::Ok().json(clinics)
        }
        Err(e) => {
            tracing::error!("error fetching clinic data: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("error fetching all clinics"))
        }
    }
}

/// Search clinics endpoint
///
/// POST /v1/clinics/search
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "state": "string",
///   "from": "HH:MM",
///   "to": "HH:MM"
/// }
/// ```
///
/// All fields are optional; constraints are applied conjunctively.
async fn search(
    state: web::Data<AppState>,
    req: web::Json<SearchParams>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::from_validation(&errors));
    }

    let params = req.into_inner();

    tracing::info!(
        "Searching clinics: name={:?}, state={:?}, from={:?}, to={:?}",
        params.name,
        params.state,
        params.from,
        params.to
    );

    let clinics = match state.fetcher.get_clinic_data().await {
        Ok(clinics) => clinics,
        Err(e) => {
            tracing::error!("error fetching clinic data: {}", e);
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::new("error fetching all clinics"));
        }
    };

    let matches = filter_clinics(clinics, &params);

    tracing::debug!("Search matched {} clinics", matches.len());

    HttpResponse::Ok().json(matches)
}

#[cfg(test)]
mod tests {
    use crate::models::HealthResponse;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "ok");
    }
}
