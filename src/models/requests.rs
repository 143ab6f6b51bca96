use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string for the recommendation endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationQuery {
    #[serde(default)]
    pub top_n: Option<usize>,
}

/// Request to book a group into a venue
///
/// `date` is `YYYY-MM-DD` and `time` is `HH:MM`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookingRequest {
    #[validate(length(min = 1))]
    pub venue_id: String,
    #[validate(length(min = 1))]
    pub user_ids: Vec<String>,
    #[validate(length(min = 1))]
    pub date: String,
    #[validate(length(min = 1))]
    pub time: String,
    #[validate(range(min = 1))]
    pub party_size: u32,
}

/// Request to modify an existing booking
///
/// Changes are echoed back verbatim, so any JSON object is accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModifyBookingRequest {
    #[serde(default)]
    pub changes: serde_json::Map<String, serde_json::Value>,
}
