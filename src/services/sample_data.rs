//! Built-in sample users and venues around Midtown Manhattan

use crate::models::{PriceTier, User, Venue};
use std::collections::HashMap;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn history(entries: &[(&str, f64)]) -> HashMap<String, f64> {
    entries.iter().map(|(id, secs)| (id.to_string(), *secs)).collect()
}

fn user(
    id: &str,
    name: &str,
    (latitude, longitude): (f64, f64),
    interests: &[&str],
    preferred_price_range: PriceTier,
    viewing_history: &[(&str, f64)],
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        latitude,
        longitude,
        interests: strings(interests),
        preferred_price_range,
        viewing_history: history(viewing_history),
    }
}

fn venue(
    id: &str,
    name: &str,
    category: &str,
    (latitude, longitude): (f64, f64),
    price_range: PriceTier,
    tags: &[&str],
    description: &str,
) -> Venue {
    Venue {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        latitude,
        longitude,
        price_range,
        tags: strings(tags),
        description: description.to_string(),
    }
}

pub fn sample_users() -> Vec<User> {
    vec![
        user(
            "user1",
            "Alex Chen",
            (40.7580, -73.9855),
            &["coffee", "art", "music", "indie"],
            PriceTier::Moderate,
            &[("venue1", 45.0), ("venue3", 30.0), ("venue5", 60.0)],
        ),
        user(
            "user2",
            "Sam Rivera",
            (40.7589, -73.9851),
            &["coffee", "books", "quiet", "study"],
            PriceTier::Budget,
            &[("venue1", 120.0), ("venue2", 90.0)],
        ),
        user(
            "user3",
            "Jordan Kim",
            (40.7520, -73.9900),
            &["music", "cocktails", "nightlife", "dancing"],
            PriceTier::Upscale,
            &[("venue4", 80.0), ("venue6", 55.0)],
        ),
        user(
            "user4",
            "Taylor Park",
            (40.7595, -73.9840),
            &["art", "coffee", "photography", "indie"],
            PriceTier::Moderate,
            &[("venue1", 35.0), ("venue5", 90.0)],
        ),
        user(
            "user5",
            "Morgan Lee",
            (40.7560, -73.9870),
            &["food", "wine", "culture", "art"],
            PriceTier::Upscale,
            &[("venue3", 65.0), ("venue5", 40.0)],
        ),
    ]
}

pub fn sample_venues() -> Vec<Venue> {
    vec![
        venue(
            "venue1",
            "Brew & Pages Cafe",
            "cafe",
            (40.7585, -73.9850),
            PriceTier::Moderate,
            &["coffee", "books", "wifi", "quiet", "art"],
            "Cozy cafe with art gallery and book exchange",
        ),
        venue(
            "venue2",
            "Study Spot Coffee",
            "cafe",
            (40.7575, -73.9845),
            PriceTier::Budget,
            &["coffee", "study", "wifi", "quiet"],
            "Student-friendly cafe with long hours",
        ),
        venue(
            "venue3",
            "The Velvet Room",
            "bar",
            (40.7530, -73.9910),
            PriceTier::Upscale,
            &["cocktails", "music", "nightlife", "lounge"],
            "Upscale cocktail lounge with live jazz",
        ),
        venue(
            "venue4",
            "Electric Pulse",
            "club",
            (40.7510, -73.9920),
            PriceTier::Upscale,
            &["dancing", "nightlife", "music", "DJ"],
            "High-energy nightclub with top DJs",
        ),
        venue(
            "venue5",
            "Indie Corner Gallery",
            "gallery",
            (40.7590, -73.9860),
            PriceTier::Moderate,
            &["art", "indie", "photography", "events"],
            "Independent art gallery with monthly exhibitions",
        ),
        venue(
            "venue6",
            "Midnight Groove",
            "club",
            (40.7515, -73.9905),
            PriceTier::Upscale,
            &["dancing", "music", "nightlife", "cocktails"],
            "Trendy club with mixed music and VIP sections",
        ),
    ]
}
