// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BookingConfirmation, BookingDetails, BookingStatus, CompatibilityScore, ExternalBookingSystems,
    NotificationsSent, PriceTier, User, Venue, VenueRecommendation,
    VenueScoreBreakdown,
};
pub use requests::{BookingRequest, ModifyBookingRequest, RecommendationQuery};
pub use responses::{
    ApiInfoResponse, BookingStatusResponse, CancellationResponse, ErrorResponse, HealthResponse,
    ModificationResponse,
};
