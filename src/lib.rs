//! Luna Engine - venue and people recommendations for social discovery
//!
//! This library provides the scoring engine behind the Luna app: haversine
//! distance, pairwise user compatibility, multi-factor venue scoring with
//! "who else is interested" attachment, and a simulated booking agent.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_user_compatibility, haversine_distance, recommend_people, recommend_venues, Recommender};
pub use models::{CompatibilityScore, PriceTier, User, Venue, VenueRecommendation};
pub use services::{DataRepository, InMemoryRepository};
