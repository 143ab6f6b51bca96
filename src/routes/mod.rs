// Route exports
pub mod bookings;
pub mod catalog;
pub mod recommendations;

use crate::config::RecommendationSettings;
use crate::core::Recommender;
use crate::models::ErrorResponse;
use crate::services::{BookingAgent, DataRepository};
use actix_web::{error, http::StatusCode, web, HttpResponse};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn DataRepository>,
    pub recommender: Recommender,
    pub booking_agent: Arc<BookingAgent>,
    pub limits: RecommendationSettings,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn DataRepository>,
        booking_agent: BookingAgent,
        limits: RecommendationSettings,
    ) -> Self {
        Self {
            recommender: Recommender::new(Arc::clone(&repository)),
            repository,
            booking_agent: Arc::new(booking_agent),
            limits,
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(catalog::configure)
        .configure(recommendations::configure)
        .configure(bookings::configure);
}

/// Build a JSON error body with the matching status code
pub(crate) fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message: message.into(),
        status_code: status.as_u16(),
    })
}

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}
