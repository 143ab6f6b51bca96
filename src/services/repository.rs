use crate::models::{User, Venue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised when resolving or loading users and venues
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("User {0} not found")]
    UserNotFound(String),

    #[error("Venue {0} not found")]
    VenueNotFound(String),

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Non-finite coordinates for {0}")]
    InvalidCoordinates(String),

    #[error("Invalid view time for {user_id} on {venue_id}: {seconds}")]
    InvalidViewTime {
        user_id: String,
        venue_id: String,
        seconds: f64,
    },

    #[error("Failed to read seed data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only, id-indexed access to users and venues
///
/// The scoring engine only ever reads through this trait, so the static
/// sample data can be swapped for a real store without touching it.
pub trait DataRepository: Send + Sync {
    fn get_user(&self, id: &str) -> Result<User, RepositoryError>;

    fn list_users(&self) -> Vec<User>;

    fn get_venue(&self, id: &str) -> Result<Venue, RepositoryError>;

    fn list_venues(&self) -> Vec<Venue>;

    fn contains_user(&self, id: &str) -> bool {
        self.get_user(id).is_ok()
    }
}

/// Seed document layout for `InMemoryRepository::from_json_file`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub venues: Vec<Venue>,
}

/// Immutable in-memory repository, listing records in insertion order
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    users: Vec<User>,
    venues: Vec<Venue>,
    user_index: HashMap<String, usize>,
    venue_index: HashMap<String, usize>,
}

impl InMemoryRepository {
    /// Build a repository, rejecting duplicate ids, non-finite coordinates
    /// and negative or non-finite view times
    pub fn new(users: Vec<User>, venues: Vec<Venue>) -> Result<Self, RepositoryError> {
        let mut user_index = HashMap::with_capacity(users.len());
        for (position, user) in users.iter().enumerate() {
            if !(user.latitude.is_finite() && user.longitude.is_finite()) {
                return Err(RepositoryError::InvalidCoordinates(user.id.clone()));
            }
            if let Some((venue_id, &seconds)) = user
                .viewing_history
                .iter()
                .find(|(_, seconds)| !(seconds.is_finite() && **seconds >= 0.0))
            {
                return Err(RepositoryError::InvalidViewTime {
                    user_id: user.id.clone(),
                    venue_id: venue_id.clone(),
                    seconds,
                });
            }
            if user_index.insert(user.id.clone(), position).is_some() {
                return Err(RepositoryError::DuplicateId(user.id.clone()));
            }
        }

        let mut venue_index = HashMap::with_capacity(venues.len());
        for (position, venue) in venues.iter().enumerate() {
            if !(venue.latitude.is_finite() && venue.longitude.is_finite()) {
                return Err(RepositoryError::InvalidCoordinates(venue.id.clone()));
            }
            if venue_index.insert(venue.id.clone(), position).is_some() {
                return Err(RepositoryError::DuplicateId(venue.id.clone()));
            }
        }

        Ok(Self {
            users,
            venues,
            user_index,
            venue_index,
        })
    }

    /// The built-in New York sample data set
    pub fn sample() -> Self {
        let users = super::sample_data::sample_users();
        let venues = super::sample_data::sample_venues();

        let user_index = users.iter().enumerate().map(|(i, u)| (u.id.clone(), i)).collect();
        let venue_index = venues.iter().enumerate().map(|(i, v)| (v.id.clone(), i)).collect();

        Self {
            users,
            venues,
            user_index,
            venue_index,
        }
    }

    /// Load users and venues from a JSON seed document
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| RepositoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let seed: SeedData = serde_json::from_str(&contents)?;
        Self::new(seed.users, seed.venues)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn venue_count(&self) -> usize {
        self.venues.len()
    }
}

impl DataRepository for InMemoryRepository {
    fn get_user(&self, id: &str) -> Result<User, RepositoryError> {
        self.user_index
            .get(id)
            .and_then(|&position| self.users.get(position))
            .cloned()
            .ok_or_else(|| RepositoryError::UserNotFound(id.to_string()))
    }

    fn list_users(&self) -> Vec<User> {
        self.users.clone()
    }

    fn get_venue(&self, id: &str) -> Result<Venue, RepositoryError> {
        self.venue_index
            .get(id)
            .and_then(|&position| self.venues.get(position))
            .cloned()
            .ok_or_else(|| RepositoryError::VenueNotFound(id.to_string()))
    }

    fn list_venues(&self) -> Vec<Venue> {
        self.venues.clone()
    }

    fn contains_user(&self, id: &str) -> bool {
        self.user_index.contains_key(id)
    }
}
