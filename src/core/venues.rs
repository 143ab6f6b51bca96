use crate::core::{
    compatibility::{calculate_user_compatibility, distinct_count, interest_ratio, shared_tags},
    distance::{haversine_distance, linear_falloff, round2},
    rank_descending,
};
use crate::models::{CompatibilityScore, User, Venue, VenueRecommendation, VenueScoreBreakdown};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Points for a venue right next to the user, falling to zero at `PROXIMITY_RANGE_KM`
pub const PROXIMITY_WEIGHT: f64 = 25.0;
/// Points when every user interest is among the venue tags
pub const INTEREST_WEIGHT: f64 = 35.0;
/// Points for a venue in the user's preferred price tier
pub const PRICE_WEIGHT: f64 = 15.0;
/// Points for a venue the user viewed for at least `VIEW_SATURATION_SECS`
pub const IMPLICIT_INTEREST_WEIGHT: f64 = 25.0;

pub const PROXIMITY_RANGE_KM: f64 = 3.0;
/// Venues closer than this get a "close by" reason
pub const NEARBY_KM: f64 = 1.0;
pub const VIEW_SATURATION_SECS: f64 = 60.0;

/// Minimum combined view/tag signal before another user counts as interested
pub const INTEREST_THRESHOLD: f64 = 0.3;
/// Minimum compatibility before an interested user is attached
pub const COMPATIBILITY_THRESHOLD: f64 = 40.0;
/// Interested users kept per venue
pub const MAX_INTERESTED_USERS: usize = 5;
/// Interested users counted in the reason text
pub const REASON_INTERESTED_USERS: usize = 3;

/// Score and rank every venue for `user`, returning at most `top_n`
///
/// Every venue is scored before the ranking is truncated, so the result is
/// always a prefix of the full ranking.
pub fn recommend_venues(
    user: &User,
    venues: &[Venue],
    users: &[User],
    top_n: usize,
) -> Vec<VenueRecommendation> {
    #[cfg(feature = "parallel")]
    let iter = venues.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = venues.iter();

    let mut recommendations: Vec<VenueRecommendation> = iter
        .map(|venue| recommend_venue(user, venue, users))
        .collect();

    rank_descending(&mut recommendations, |r| r.score);
    recommendations.truncate(top_n);
    recommendations
}

/// Build the full recommendation for one venue
pub fn recommend_venue(user: &User, venue: &Venue, users: &[User]) -> VenueRecommendation {
    let breakdown = score_venue(user, venue);
    let score = round2(breakdown.total().clamp(0.0, 100.0));
    let mut reasons = breakdown.reasons;

    let interested_users = find_interested_users(user, venue, users);
    if !interested_users.is_empty() {
        // Only the leading matches are counted in the text even though more are returned
        let counted = interested_users.len().min(REASON_INTERESTED_USERS);
        reasons.push(format!("{} compatible friends interested", counted));
    }

    VenueRecommendation {
        venue: venue.clone(),
        score,
        reasons,
        interested_users,
    }
}

/// Calculate the four weighted venue components for a user
///
/// Scoring formula (0-100):
/// score = (
///     proximity * 25 +          # Linear falloff to zero at 3km
///     interest_ratio * 35 +     # |interests ∩ tags| / |interests|
///     price_match * 15 +        # Same tier or nothing
///     view_ratio * 25           # Seconds viewed / 60, saturating
/// )
pub fn score_venue(user: &User, venue: &Venue) -> VenueScoreBreakdown {
    let mut reasons = Vec::new();

    // Proximity
    let distance_km = haversine_distance(user.latitude, user.longitude, venue.latitude, venue.longitude);
    let proximity = PROXIMITY_WEIGHT * linear_falloff(distance_km, PROXIMITY_RANGE_KM);
    if distance_km < NEARBY_KM {
        reasons.push(format!("Only {:.1}km away", distance_km));
    }

    // Interest overlap
    let matching_tags = shared_tags(&user.interests, &venue.tags);
    let interest = INTEREST_WEIGHT * interest_ratio(matching_tags.len(), distinct_count(&user.interests));
    if !matching_tags.is_empty() {
        reasons.push(format!("Matches your interests: {}", matching_tags.join(", ")));
    }

    // Price fit
    let price = if venue.price_range == user.preferred_price_range {
        reasons.push(format!("Fits your {} budget", venue.price_range));
        PRICE_WEIGHT
    } else {
        0.0
    };

    // Implicit interest from browsing
    let implicit_interest = match user.seconds_viewed(&venue.id) {
        Some(seconds) => {
            reasons.push(format!("You spent {}s viewing this", seconds));
            IMPLICIT_INTEREST_WEIGHT * (seconds / VIEW_SATURATION_SECS).min(1.0)
        }
        None => 0.0,
    };

    VenueScoreBreakdown {
        distance_km,
        proximity,
        interest,
        price,
        implicit_interest,
        reasons,
    }
}

/// How strongly `other` appears interested in `venue`
///
/// Sum of view time in minutes (not capped) and the fraction of venue tags
/// among their interests. A venue without tags contributes nothing for the
/// tag part.
pub fn venue_interest_signal(other: &User, venue: &Venue) -> f64 {
    let viewed = other
        .seconds_viewed(&venue.id)
        .map(|seconds| seconds / VIEW_SATURATION_SECS)
        .unwrap_or(0.0);

    let overlap = shared_tags(&other.interests, &venue.tags).len();
    viewed + interest_ratio(overlap, distinct_count(&venue.tags))
}

/// Other users interested in `venue` who are also compatible with `user`
///
/// Highest compatibility first, at most `MAX_INTERESTED_USERS`.
pub fn find_interested_users(user: &User, venue: &Venue, users: &[User]) -> Vec<CompatibilityScore> {
    let mut interested: Vec<CompatibilityScore> = users
        .iter()
        .filter(|other| other.id != user.id)
        .filter(|other| venue_interest_signal(other, venue) > INTEREST_THRESHOLD)
        .map(|other| calculate_user_compatibility(user, other))
        .filter(|compatibility| compatibility.score > COMPATIBILITY_THRESHOLD)
        .collect();

    rank_descending(&mut interested, |c| c.score);
    interested.truncate(MAX_INTERESTED_USERS);
    interested
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceTier;
    use std::collections::HashMap;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn create_user(id: &str, interests: &[&str], lat: f64, lon: f64) -> User {
        User {
            id: id.to_string(),
            name: format!("User {}", id),
            latitude: lat,
            longitude: lon,
            interests: tags(interests),
            preferred_price_range: PriceTier::Moderate,
            viewing_history: HashMap::new(),
        }
    }

    fn create_venue(id: &str, venue_tags: &[&str], tier: PriceTier, lat: f64, lon: f64) -> Venue {
        Venue {
            id: id.to_string(),
            name: format!("Venue {}", id),
            category: "cafe".to_string(),
            latitude: lat,
            longitude: lon,
            price_range: tier,
            tags: tags(venue_tags),
            description: String::new(),
        }
    }

    fn reference_user() -> User {
        let mut user = create_user("user1", &["coffee", "art", "music", "indie"], 40.7580, -73.9855);
        user.viewing_history.insert("venue1".to_string(), 45.0);
        user
    }

    fn reference_venue() -> Venue {
        create_venue(
            "venue1",
            &["coffee", "books", "wifi", "quiet", "art"],
            PriceTier::Moderate,
            40.7585,
            -73.9850,
        )
    }

    #[test]
    fn test_reference_breakdown() {
        let breakdown = score_venue(&reference_user(), &reference_venue());

        assert!(breakdown.distance_km < 0.1);
        assert!(breakdown.proximity > 24.0 && breakdown.proximity <= 25.0);
        assert_eq!(breakdown.interest, 17.5);
        assert_eq!(breakdown.price, 15.0);
        assert_eq!(breakdown.implicit_interest, 18.75);
        assert!((breakdown.total() - 76.25).abs() < 1.0);
        assert_eq!(
            breakdown.reasons,
            vec![
                "Only 0.1km away".to_string(),
                "Matches your interests: coffee, art".to_string(),
                "Fits your moderate budget".to_string(),
                "You spent 45s viewing this".to_string(),
            ]
        );
    }

    #[test]
    fn test_user_without_interests() {
        let user = create_user("empty", &[], 40.7580, -73.9855);
        let breakdown = score_venue(&user, &reference_venue());

        assert_eq!(breakdown.interest, 0.0);
        assert!(!breakdown.reasons.iter().any(|r| r.starts_with("Matches")));
    }

    #[test]
    fn test_view_time_saturates() {
        let mut user = create_user("u", &[], 0.0, 0.0);
        user.viewing_history.insert("v".to_string(), 600.0);
        let venue = create_venue("v", &["art"], PriceTier::Budget, 10.0, 10.0);

        let breakdown = score_venue(&user, &venue);

        assert_eq!(breakdown.implicit_interest, IMPLICIT_INTEREST_WEIGHT);
        assert_eq!(breakdown.proximity, 0.0);
        assert_eq!(breakdown.price, 0.0);
        assert_eq!(breakdown.reasons, vec!["You spent 600s viewing this".to_string()]);
    }

    #[test]
    fn test_far_venue_has_no_proximity_reason() {
        let user = create_user("u", &["art"], 40.7580, -73.9855);
        let venue = create_venue("v", &["art"], PriceTier::Moderate, 40.7800, -73.9855);

        let breakdown = score_venue(&user, &venue);

        assert!(breakdown.distance_km > NEARBY_KM);
        assert!(breakdown.proximity > 0.0);
        assert!(!breakdown.reasons.iter().any(|r| r.starts_with("Only")));
    }

    #[test]
    fn test_interest_signal_untagged_venue() {
        let other = create_user("o", &["art"], 0.0, 0.0);
        let venue = create_venue("v", &[], PriceTier::Budget, 0.0, 0.0);

        assert_eq!(venue_interest_signal(&other, &venue), 0.0);
    }

    #[test]
    fn test_interest_signal_view_time_is_uncapped() {
        let mut other = create_user("o", &[], 0.0, 0.0);
        other.viewing_history.insert("v".to_string(), 120.0);
        let venue = create_venue("v", &["art"], PriceTier::Budget, 0.0, 0.0);

        assert_eq!(venue_interest_signal(&other, &venue), 2.0);
    }

    #[test]
    fn test_interested_users_exclude_self_and_strangers() {
        let user = create_user("me", &["art", "coffee"], 40.7580, -73.9855);
        let venue = create_venue("v", &["art", "coffee"], PriceTier::Moderate, 40.7580, -73.9855);
        let friend = create_user("friend", &["art", "coffee"], 40.7581, -73.9855);
        // Interested, but lives far away with nothing in common
        let mut stranger = create_user("stranger", &["art", "hiking", "chess"], 34.0522, -118.2437);
        stranger.preferred_price_range = PriceTier::Budget;
        let users = vec![user.clone(), friend, stranger];

        let interested = find_interested_users(&user, &venue, &users);

        assert_eq!(interested.len(), 1);
        assert_eq!(interested[0].user_id, "friend");
    }

    #[test]
    fn test_reason_counts_at_most_three() {
        let user = create_user("me", &["art"], 40.7580, -73.9855);
        let venue = create_venue("v", &["art"], PriceTier::Moderate, 40.7580, -73.9855);
        let mut users = vec![user.clone()];
        for i in 0..7 {
            users.push(create_user(&format!("f{}", i), &["art"], 40.7580 + i as f64 * 0.001, -73.9855));
        }

        let recommendation = recommend_venue(&user, &venue, &users);

        assert_eq!(recommendation.interested_users.len(), MAX_INTERESTED_USERS);
        assert!(recommendation
            .reasons
            .contains(&"3 compatible friends interested".to_string()));
        for pair in recommendation.interested_users.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_truncation_is_prefix_of_full_ranking() {
        let user = reference_user();
        let venues = vec![
            reference_venue(),
            create_venue("venue2", &["coffee", "study"], PriceTier::Budget, 40.7575, -73.9845),
            create_venue("venue3", &["music", "nightlife"], PriceTier::Upscale, 40.7530, -73.9910),
            create_venue("venue4", &["dancing"], PriceTier::Upscale, 40.7510, -73.9920),
        ];
        let users = vec![user.clone()];

        let full = recommend_venues(&user, &venues, &users, venues.len());
        let top_two = recommend_venues(&user, &venues, &users, 2);

        assert_eq!(full.len(), venues.len());
        assert_eq!(top_two.len(), 2);
        assert_eq!(top_two[..], full[..2]);
        assert_eq!(full[0].venue.id, "venue1");
    }

    #[test]
    fn test_no_venues() {
        let user = reference_user();
        assert!(recommend_venues(&user, &[], &[], 5).is_empty());
    }
}
