use super::{error_response, AppState};
use crate::models::{ApiInfoResponse, HealthResponse};
use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use std::collections::BTreeMap;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/users", web::get().to(list_users))
        .route("/users/{user_id}", web::get().to(get_user))
        .route("/venues", web::get().to(list_venues))
        .route("/venues/{venue_id}", web::get().to(get_venue));
}

/// Service description and endpoint map
async fn root() -> impl Responder {
    let endpoints: BTreeMap<String, String> = [
        ("users", "GET /users - List all users"),
        ("venues", "GET /venues - List all venues"),
        ("venue_recommendations", "GET /recommendations/venues/{user_id}"),
        ("people_recommendations", "GET /recommendations/people/{user_id}"),
        ("create_booking", "POST /bookings/create"),
        ("booking_status", "GET /bookings/{booking_id}"),
        ("health", "GET /health"),
    ]
    .into_iter()
    .map(|(name, description)| (name.to_string(), description.to_string()))
    .collect();

    HttpResponse::Ok().json(ApiInfoResponse {
        message: "Luna Backend API - Social Venue Discovery Platform".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Intelligent Social Venue Discovery".to_string(),
        endpoints,
        features: vec![
            "Multi-factor venue recommendation algorithm".to_string(),
            "User compatibility scoring".to_string(),
            "Automated booking agent with external API simulation".to_string(),
            "Spatial analysis and interest matching".to_string(),
        ],
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

async fn list_users(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.repository.list_users())
}

async fn get_user(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let user_id = path.into_inner();

    match state.repository.get_user(&user_id) {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => {
            tracing::debug!("User lookup failed: {}", e);
            error_response(StatusCode::NOT_FOUND, "User not found", e.to_string())
        }
    }
}

async fn list_venues(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.repository.list_venues())
}

async fn get_venue(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let venue_id = path.into_inner();

    match state.repository.get_venue(&venue_id) {
        Ok(venue) => HttpResponse::Ok().json(venue),
        Err(e) => {
            tracing::debug!("Venue lookup failed: {}", e);
            error_response(StatusCode::NOT_FOUND, "Venue not found", e.to_string())
        }
    }
}
