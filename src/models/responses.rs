use crate::models::domain::BookingStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Service description returned from the root endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfoResponse {
    pub message: String,
    pub version: String,
    pub description: String,
    pub endpoints: BTreeMap<String, String>,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationResponse {
    pub booking_id: String,
    pub status: BookingStatus,
    pub refund_status: String,
    pub refund_amount: String,
    pub cancelled_at: chrono::DateTime<chrono::Utc>,
    pub cancellation_reason: String,
    pub notifications_sent: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModificationResponse {
    pub booking_id: String,
    pub status: BookingStatus,
    pub changes: serde_json::Map<String, serde_json::Value>,
    pub modified_at: chrono::DateTime<chrono::Utc>,
    pub new_confirmation_code: String,
    pub notifications_sent: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingStatusResponse {
    pub booking_id: String,
    pub status: BookingStatus,
    pub checked_at: chrono::DateTime<chrono::Utc>,
}
