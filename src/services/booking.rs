use crate::models::{
    BookingConfirmation, BookingDetails, BookingRequest, BookingStatus, BookingStatusResponse,
    CancellationResponse, ExternalBookingSystems, ModificationResponse, NotificationsSent,
    PriceTier, Venue,
};
use crate::services::{DataRepository, RepositoryError};
use chrono::{NaiveDate, NaiveTime, Utc};
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

const CONFIRMATION_CODE_LEN: usize = 8;
const CONFIRMATION_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Groups at least this large get the group discount
const GROUP_DISCOUNT_MIN_SIZE: usize = 4;

/// Errors that can occur when creating a booking
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Venue {0} not found")]
    VenueNotFound(String),

    #[error("User {0} not found")]
    UserNotFound(String),

    #[error("Party size ({party_size}) doesn't match number of users ({user_count})")]
    PartySizeMismatch { party_size: u32, user_count: usize },

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for BookingError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::UserNotFound(id) => BookingError::UserNotFound(id),
            RepositoryError::VenueNotFound(id) => BookingError::VenueNotFound(id),
            other => BookingError::Repository(other),
        }
    }
}

/// Simulated booking agent
///
/// Stands in for restaurant reservation, ticketing and payment providers.
/// Every call returns a fixed-shape record with freshly generated identifiers;
/// nothing is stored apart from the booking counter.
#[derive(Debug)]
pub struct BookingAgent {
    id_prefix: String,
    counter: AtomicU64,
}

impl BookingAgent {
    /// Create an agent whose first booking is numbered `starting_counter + 1`
    pub fn new(id_prefix: impl Into<String>, starting_counter: u64) -> Self {
        Self {
            id_prefix: id_prefix.into(),
            counter: AtomicU64::new(starting_counter),
        }
    }

    /// Check a request against the repository and return the venue to book
    ///
    /// Checks run in order: venue exists, every user exists, party size
    /// matches the user list, date and time parse.
    pub fn validate_request(
        request: &BookingRequest,
        repository: &dyn DataRepository,
    ) -> Result<Venue, BookingError> {
        let venue = repository.get_venue(&request.venue_id)?;

        if let Some(missing) = request.user_ids.iter().find(|id| !repository.contains_user(id)) {
            return Err(BookingError::UserNotFound(missing.clone()));
        }

        if request.party_size as usize != request.user_ids.len() {
            return Err(BookingError::PartySizeMismatch {
                party_size: request.party_size,
                user_count: request.user_ids.len(),
            });
        }

        NaiveDate::parse_from_str(&request.date, "%Y-%m-%d")
            .map_err(|_| BookingError::InvalidDate(request.date.clone()))?;
        NaiveTime::parse_from_str(&request.time, "%H:%M")
            .map_err(|_| BookingError::InvalidTime(request.time.clone()))?;

        Ok(venue)
    }

    /// Create a confirmed booking for a group at a venue
    pub fn create_booking(&self, request: &BookingRequest, venue: &Venue) -> BookingConfirmation {
        let number = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let booking_id = format!("{}-{}", self.id_prefix, number);
        let confirmation_code = generate_confirmation_code();

        let mut rng = rand::rng();
        let external_booking_systems = ExternalBookingSystems {
            opentable_id: format!("OT-{}", rng.random_range(100_000..=999_999)),
            resy_id: format!("RESY-{}", rng.random_range(100_000..=999_999)),
            payment_intent_id: format!("pi_{}", generate_confirmation_code().to_lowercase()),
            payment_status: "succeeded".to_string(),
        };

        let details = BookingDetails {
            booking_id: booking_id.clone(),
            venue_id: request.venue_id.clone(),
            venue_name: venue.name.clone(),
            venue_category: venue.category.clone(),
            venue_address: format!("{}, {}", venue.latitude, venue.longitude),
            date: request.date.clone(),
            time: request.time.clone(),
            party_size: request.party_size,
            user_ids: request.user_ids.clone(),
            confirmation_code: confirmation_code.clone(),
            status: BookingStatus::Confirmed,
            booked_at: Utc::now(),
            estimated_wait: "0 minutes".to_string(),
            special_requests: "Luna group booking - social meetup".to_string(),
            external_booking_systems,
            notifications_sent: NotificationsSent::all(),
            cancellation_policy: "Free cancellation up to 2 hours before".to_string(),
            estimated_cost_per_person: estimate_cost(venue.price_range).to_string(),
            group_discount_applied: request.user_ids.len() >= GROUP_DISCOUNT_MIN_SIZE,
        };

        tracing::info!(
            "Booked {} at {} for {} users ({})",
            booking_id,
            venue.id,
            request.user_ids.len(),
            confirmation_code
        );

        BookingConfirmation {
            booking_id,
            status: BookingStatus::Confirmed,
            venue_name: venue.name.clone(),
            confirmation_code,
            details,
        }
    }

    /// Cancel a booking with a full refund
    pub fn cancel_booking(&self, booking_id: &str) -> CancellationResponse {
        tracing::info!("Cancelled booking {}", booking_id);

        CancellationResponse {
            booking_id: booking_id.to_string(),
            status: BookingStatus::Cancelled,
            refund_status: "processed".to_string(),
            refund_amount: "Full refund issued".to_string(),
            cancelled_at: Utc::now(),
            cancellation_reason: "User requested".to_string(),
            notifications_sent: true,
        }
    }

    /// Apply changes to a booking, issuing a new confirmation code
    pub fn modify_booking(
        &self,
        booking_id: &str,
        changes: serde_json::Map<String, serde_json::Value>,
    ) -> ModificationResponse {
        tracing::info!("Modified booking {} ({} fields)", booking_id, changes.len());

        ModificationResponse {
            booking_id: booking_id.to_string(),
            status: BookingStatus::Modified,
            changes,
            modified_at: Utc::now(),
            new_confirmation_code: generate_confirmation_code(),
            notifications_sent: true,
        }
    }

    pub fn booking_status(&self, booking_id: &str) -> BookingStatusResponse {
        BookingStatusResponse {
            booking_id: booking_id.to_string(),
            status: BookingStatus::Confirmed,
            checked_at: Utc::now(),
        }
    }
}

/// Random 8-character code of uppercase letters and digits
pub fn generate_confirmation_code() -> String {
    let mut rng = rand::rng();
    (0..CONFIRMATION_CODE_LEN)
        .map(|_| char::from(CONFIRMATION_CHARSET[rng.random_range(0..CONFIRMATION_CHARSET.len())]))
        .collect()
}

/// Per-person cost estimate for a price tier
pub fn estimate_cost(price_range: PriceTier) -> &'static str {
    match price_range {
        PriceTier::Budget => "$10-20",
        PriceTier::Moderate => "$25-50",
        PriceTier::Upscale => "$60-150",
    }
}
