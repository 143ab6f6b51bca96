use super::{error_response, AppState};
use crate::models::RecommendationQuery;
use crate::services::RepositoryError;
use actix_web::{http::StatusCode, web, HttpResponse, Responder};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/recommendations/venues/{user_id}", web::get().to(venue_recommendations))
        .route("/recommendations/people/{user_id}", web::get().to(people_recommendations));
}

/// Personalized venue recommendations
///
/// GET /recommendations/venues/{user_id}?top_n=5
///
/// Each venue is scored 0-100 from distance (25), interest match (35),
/// price fit (15) and viewing history (25), and carries up to five
/// compatible users who are also interested in it. `top_n` defaults to 5
/// and is capped at the configured maximum (20).
async fn venue_recommendations(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<RecommendationQuery>,
) -> impl Responder {
    let user_id = path.into_inner();
    let top_n = state.limits.venue_limit(query.top_n);

    tracing::info!("Recommending venues for user: {}, top_n: {}", user_id, top_n);

    match state.recommender.venues_for(&user_id, top_n) {
        Ok(recommendations) => HttpResponse::Ok().json(recommendations),
        Err(e) => repository_error(e),
    }
}

/// Compatible people recommendations
///
/// GET /recommendations/people/{user_id}?top_n=10
///
/// Users are scored 0-100 from shared interests (40), proximity (30) and
/// price tier affinity (30).
async fn people_recommendations(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<RecommendationQuery>,
) -> impl Responder {
    let user_id = path.into_inner();
    let top_n = state.limits.people_limit(query.top_n);

    tracing::info!("Recommending people for user: {}, top_n: {}", user_id, top_n);

    match state.recommender.people_for(&user_id, top_n) {
        Ok(recommendations) => HttpResponse::Ok().json(recommendations),
        Err(e) => repository_error(e),
    }
}

fn repository_error(e: RepositoryError) -> HttpResponse {
    if let RepositoryError::UserNotFound(_) = &e {
        return error_response(StatusCode::NOT_FOUND, "User not found", e.to_string());
    }

    tracing::error!("Recommendation failed: {}", e);
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Recommendation failed",
        e.to_string(),
    )
}
