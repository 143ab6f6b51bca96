use crate::core::distance::{haversine_distance, linear_falloff, round2};
use crate::models::{CompatibilityScore, PriceTier, User};
use std::collections::HashSet;

/// Weight of the shared-interest ratio
pub const INTEREST_WEIGHT: f64 = 0.4;
/// Weight of geographic proximity
pub const DISTANCE_WEIGHT: f64 = 0.3;
/// Weight of price tier affinity
pub const PRICE_WEIGHT: f64 = 0.3;
/// Distance at which proximity stops contributing
pub const MAX_DISTANCE_KM: f64 = 5.0;

/// Calculate how well `other` suits `user` (0-100)
///
/// Scoring formula:
/// score = (
///     interest_ratio * 0.4 +     # |shared| / max(|interests1|, |interests2|)
///     distance_score * 0.3 +     # Linear falloff to zero at 5km
///     price_score * 0.3          # 1.0 same tier, 0.5 adjacent, 0.0 two apart
/// ) * 100
pub fn calculate_user_compatibility(user: &User, other: &User) -> CompatibilityScore {
    let shared_interests = shared_tags(&user.interests, &other.interests);
    let interest_score = interest_ratio(
        shared_interests.len(),
        distinct_count(&user.interests).max(distinct_count(&other.interests)),
    );

    let distance_km = haversine_distance(user.latitude, user.longitude, other.latitude, other.longitude);
    let distance_score = linear_falloff(distance_km, MAX_DISTANCE_KM);

    let price_score = price_affinity(user.preferred_price_range, other.preferred_price_range);

    let total_score = (INTEREST_WEIGHT * interest_score
        + DISTANCE_WEIGHT * distance_score
        + PRICE_WEIGHT * price_score)
        * 100.0;

    CompatibilityScore {
        user_id: other.id.clone(),
        user_name: other.name.clone(),
        score: round2(total_score.clamp(0.0, 100.0)),
        shared_interests,
        distance_km: round2(distance_km),
    }
}

/// Price tier affinity (0-1): 1.0 same tier, 0.5 adjacent, 0.0 two tiers apart
#[inline]
pub fn price_affinity(a: PriceTier, b: PriceTier) -> f64 {
    let diff = f64::from(a.ordinal().abs_diff(b.ordinal()));
    (1.0 - diff / 2.0).max(0.0)
}

/// Tags present in both lists, in the order they appear in `ours`, without duplicates
pub fn shared_tags(ours: &[String], theirs: &[String]) -> Vec<String> {
    let theirs: HashSet<&str> = theirs.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();

    ours.iter()
        .map(String::as_str)
        .filter(|tag| theirs.contains(tag) && seen.insert(*tag))
        .map(str::to_string)
        .collect()
}

/// Number of distinct tags in a list
#[inline]
pub fn distinct_count(tags: &[String]) -> usize {
    tags.iter().map(String::as_str).collect::<HashSet<_>>().len()
}

/// `matched / total`, or 0 when there is nothing to divide by
#[inline]
pub fn interest_ratio(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    matched as f64 / total as f64
}
