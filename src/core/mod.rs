// Core algorithm exports
pub mod compatibility;
pub mod distance;
pub mod people;
pub mod recommender;
pub mod venues;

pub use compatibility::{calculate_user_compatibility, price_affinity};
pub use distance::haversine_distance;
pub use people::recommend_people;
pub use recommender::Recommender;
pub use venues::{find_interested_users, recommend_venues, score_venue};

/// Sort by a score, highest first
///
/// The sort is stable, so ties keep their input order and the top `n` of a
/// ranking never depends on how far it is later truncated.
pub(crate) fn rank_descending<T>(items: &mut [T], score: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| score(b).total_cmp(&score(a)));
}
