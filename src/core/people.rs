use crate::core::{compatibility::calculate_user_compatibility, rank_descending};
use crate::models::{CompatibilityScore, User};

/// Rank every other user by compatibility with `user`, returning at most `top_n`
pub fn recommend_people(user: &User, users: &[User], top_n: usize) -> Vec<CompatibilityScore> {
    let mut compatibilities: Vec<CompatibilityScore> = users
        .iter()
        .filter(|other| other.id != user.id)
        .map(|other| calculate_user_compatibility(user, other))
        .collect();

    rank_descending(&mut compatibilities, |c| c.score);
    compatibilities.truncate(top_n);
    compatibilities
}
