use super::{error_response, AppState};
use crate::models::{BookingRequest, ModifyBookingRequest};
use crate::services::{BookingAgent, BookingError};
use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use validator::Validate;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/bookings/create", web::post().to(create_booking))
        .route("/bookings/{booking_id}", web::get().to(booking_status))
        .route("/bookings/{booking_id}/cancel", web::post().to(cancel_booking))
        .route("/bookings/{booking_id}/modify", web::post().to(modify_booking));
}

/// Create a group booking at a venue
///
/// POST /bookings/create
///
/// Request body:
/// ```json
/// {
///   "venue_id": "venue1",
///   "user_ids": ["user1", "user2"],
///   "date": "2026-11-20",
///   "time": "19:30",
///   "party_size": 2
/// }
/// ```
async fn create_booking(
    state: web::Data<AppState>,
    req: web::Json<BookingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for booking request: {:?}", errors);
        return error_response(StatusCode::BAD_REQUEST, "Validation failed", errors.to_string());
    }

    let venue = match BookingAgent::validate_request(&req, state.repository.as_ref()) {
        Ok(venue) => venue,
        Err(e) => return booking_error(e),
    };

    HttpResponse::Ok().json(state.booking_agent.create_booking(&req, &venue))
}

async fn booking_status(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    HttpResponse::Ok().json(state.booking_agent.booking_status(&path))
}

async fn cancel_booking(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    HttpResponse::Ok().json(state.booking_agent.cancel_booking(&path))
}

async fn modify_booking(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<ModifyBookingRequest>,
) -> impl Responder {
    let changes = req.into_inner().changes;
    HttpResponse::Ok().json(state.booking_agent.modify_booking(&path, changes))
}

fn booking_error(e: BookingError) -> HttpResponse {
    let (status, error) = match &e {
        BookingError::VenueNotFound(_) => (StatusCode::NOT_FOUND, "Venue not found"),
        BookingError::UserNotFound(_) => (StatusCode::NOT_FOUND, "User not found"),
        BookingError::PartySizeMismatch { .. } => (StatusCode::BAD_REQUEST, "Party size mismatch"),
        BookingError::InvalidDate(_) | BookingError::InvalidTime(_) => {
            (StatusCode::BAD_REQUEST, "Invalid schedule")
        }
        BookingError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Booking failed"),
    };

    if status.is_server_error() {
        tracing::error!("Booking failed: {}", e);
    } else {
        tracing::info!("Booking rejected: {}", e);
    }

    error_response(status, error, e.to_string())
}
