//! Driving port for booking mutations.
//!
//! Inbound adapters hand a [`BookingDraft`] to this port and receive the new
//! booking's identifier once it is stored.

use async_trait::async_trait;

use crate::domain::{BookingDraft, BookingId, BookingStatus, Error};

/// Confirmation message returned for every created booking.
pub const BOOKING_CREATED_MESSAGE: &str = "Booking created successfully";

/// Request to create a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBookingRequest {
    pub draft: BookingDraft,
}

/// Outcome of a successful booking creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookingResponse {
    pub booking_id: BookingId,
    pub status: BookingStatus,
    pub message: String,
}

impl CreateBookingResponse {
    /// Response for a freshly stored booking.
    pub fn created(booking_id: BookingId, status: BookingStatus) -> Self {
        Self {
            booking_id,
            status,
            message: BOOKING_CREATED_MESSAGE.to_owned(),
        }
    }
}

/// Driving port for booking mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingCommand: Send + Sync {
    /// Validate and store a new booking.
    ///
    /// Fails with [`crate::domain::ErrorCode::InvalidRequest`] carrying every
    /// failed field rule when the draft is rejected.
    async fn create_booking(
        &self,
        request: CreateBookingRequest,
    ) -> Result<CreateBookingResponse, Error>;
}
