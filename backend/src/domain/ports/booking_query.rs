//! Driving port for booking reads.

use async_trait::async_trait;
use pagination::Paged;

use crate::domain::{Booking, BookingId, BookingSummary, Error};

/// Request to fetch one booking by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetBookingRequest {
    pub booking_id: BookingId,
}

/// Raw paging input for a paged listing.
///
/// Values are validated by the service so out-of-range input is reported
/// against `pageNumber` and `pageSize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListBookingsPageRequest {
    pub page_number: i64,
    pub page_size: i64,
}

impl Default for ListBookingsPageRequest {
    fn default() -> Self {
        Self {
            page_number: i64::from(pagination::DEFAULT_PAGE_NUMBER),
            page_size: i64::from(pagination::DEFAULT_PAGE_SIZE),
        }
    }
}

/// Driving port for booking read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingQuery: Send + Sync {
    /// Fetch one booking; `Ok(None)` when no booking has the id.
    async fn get_booking(&self, request: GetBookingRequest) -> Result<Option<Booking>, Error>;

    /// List every booking, newest first.
    async fn list_bookings(&self) -> Result<Vec<BookingSummary>, Error>;

    /// List one page of bookings, newest first.
    async fn list_bookings_page(
        &self,
        request: ListBookingsPageRequest,
    ) -> Result<Paged<BookingSummary>, Error>;
}
