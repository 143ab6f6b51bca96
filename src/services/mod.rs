// Service exports
pub mod booking;
pub mod repository;
pub mod sample_data;

pub use booking::{BookingAgent, BookingError};
pub use repository::{DataRepository, InMemoryRepository, RepositoryError, SeedData};
