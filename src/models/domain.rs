use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Ordinal price category shared by users and venues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Budget,
    Moderate,
    Upscale,
}

impl PriceTier {
    /// Ordinal used for affinity scoring (budget=1, moderate=2, upscale=3)
    #[inline]
    pub fn ordinal(self) -> u8 {
        match self {
            PriceTier::Budget => 1,
            PriceTier::Moderate => 2,
            PriceTier::Upscale => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PriceTier::Budget => "budget",
            PriceTier::Moderate => "moderate",
            PriceTier::Upscale => "upscale",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User profile with location, interests and browsing signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub interests: Vec<String>,
    pub preferred_price_range: PriceTier,
    /// Venue id -> seconds spent viewing it (fractional seconds allowed)
    #[serde(default)]
    pub viewing_history: HashMap<String, f64>,
}

impl User {
    /// Seconds this user spent viewing a venue, if recorded
    #[inline]
    pub fn seconds_viewed(&self, venue_id: &str) -> Option<f64> {
        self.viewing_history.get(venue_id).copied()
    }
}

/// A place users can be recommended and booked into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price_range: PriceTier,
    pub tags: Vec<String>,
    pub description: String,
}

/// How well another user suits the querying user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    pub user_id: String,
    pub user_name: String,
    pub score: f64,
    pub shared_interests: Vec<String>,
    pub distance_km: f64,
}

/// Scored venue with human-readable reasons and interested compatible users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueRecommendation {
    pub venue: Venue,
    pub score: f64,
    pub reasons: Vec<String>,
    pub interested_users: Vec<CompatibilityScore>,
}

/// Weighted components of a venue score for a single user
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VenueScoreBreakdown {
    pub distance_km: f64,
    pub proximity: f64,
    pub interest: f64,
    pub price: f64,
    pub implicit_interest: f64,
    pub reasons: Vec<String>,
}

impl VenueScoreBreakdown {
    /// Sum of the weighted components (unrounded)
    #[inline]
    pub fn total(&self) -> f64 {
        self.proximity + self.interest + self.price + self.implicit_interest
    }
}

/// Simulated identifiers from third-party booking and payment systems
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalBookingSystems {
    pub opentable_id: String,
    pub resy_id: String,
    pub payment_intent_id: String,
    pub payment_status: String,
}

/// Notification channels the booking was announced on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationsSent {
    pub email: bool,
    pub push_notification: bool,
    pub sms: bool,
    pub in_app: bool,
}

impl NotificationsSent {
    pub fn all() -> Self {
        Self {
            email: true,
            push_notification: true,
            sms: true,
            in_app: true,
        }
    }
}

/// Full record attached to a booking confirmation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDetails {
    pub booking_id: String,
    pub venue_id: String,
    pub venue_name: String,
    pub venue_category: String,
    pub venue_address: String,
    pub date: String,
    pub time: String,
    pub party_size: u32,
    pub user_ids: Vec<String>,
    pub confirmation_code: String,
    pub status: BookingStatus,
    pub booked_at: chrono::DateTime<chrono::Utc>,
    pub estimated_wait: String,
    pub special_requests: String,
    pub external_booking_systems: ExternalBookingSystems,
    pub notifications_sent: NotificationsSent,
    pub cancellation_policy: String,
    pub estimated_cost_per_person: String,
    pub group_discount_applied: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub booking_id: String,
    pub status: BookingStatus,
    pub venue_name: String,
    pub confirmation_code: String,
    pub details: BookingDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
    Modified,
}
