use crate::core::{people::recommend_people, venues::recommend_venues};
use crate::models::{CompatibilityScore, VenueRecommendation};
use crate::services::{DataRepository, RepositoryError};
use std::sync::Arc;

/// Resolves users through the repository and runs the scoring engine
///
/// The engine itself never clamps `top_n`; callers pass an already-capped value.
#[derive(Clone)]
pub struct Recommender {
    repository: Arc<dyn DataRepository>,
}

impl Recommender {
    pub fn new(repository: Arc<dyn DataRepository>) -> Self {
        Self { repository }
    }

    /// Ranked venue recommendations for a user
    ///
    /// # Errors
    /// `RepositoryError::UserNotFound` if `user_id` is unknown
    pub fn venues_for(
        &self,
        user_id: &str,
        top_n: usize,
    ) -> Result<Vec<VenueRecommendation>, RepositoryError> {
        let user = self.repository.get_user(user_id)?;
        let venues = self.repository.list_venues();
        let users = self.repository.list_users();

        let recommendations = recommend_venues(&user, &venues, &users, top_n);

        tracing::debug!(
            "Scored {} venues against {} users for {}, returning {}",
            venues.len(),
            users.len(),
            user_id,
            recommendations.len()
        );

        Ok(recommendations)
    }

    /// Most compatible people for a user
    ///
    /// # Errors
    /// `RepositoryError::UserNotFound` if `user_id` is unknown
    pub fn people_for(
        &self,
        user_id: &str,
        top_n: usize,
    ) -> Result<Vec<CompatibilityScore>, RepositoryError> {
        let user = self.repository.get_user(user_id)?;
        let users = self.repository.list_users();

        let recommendations = recommend_people(&user, &users, top_n);

        tracing::debug!(
            "Ranked {} candidates for {}, returning {}",
            users.len().saturating_sub(1),
            user_id,
            recommendations.len()
        );

        Ok(recommendations)
    }
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::InMemoryRepository;

    fn recommender() -> Recommender {
        Recommender::new(Arc::new(InMemoryRepository::sample()))
    }

    #[test]
    fn test_venues_for_known_user() {
        let result = recommender().venues_for("user1", 3).unwrap();

        assert_eq!(result.len(), 3);
        for pair in result.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_unknown_user() {
        let err = recommender().venues_for("nobody", 3).unwrap_err();
        assert!(matches!(err, RepositoryError::UserNotFound(id) if id == "nobody"));

        assert!(recommender().people_for("nobody", 3).is_err());
    }

    #[test]
    fn test_people_for_excludes_self() {
        let result = recommender().people_for("user2", 10).unwrap();

        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|c| c.user_id != "user2"));
    }
}
