//! Booking domain services.
//!
//! These services implement the booking driving ports: field validation and
//! entity construction on the command side, listing and projection on the
//! query side. Storage is reached only through [`BookingRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use pagination::Paged;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    BookingCommand, BookingQuery, BookingRepository, BookingRepositoryError, CreateBookingRequest,
    CreateBookingResponse, GetBookingRequest, ListBookingsPageRequest,
};
use crate::domain::{
    Booking, BookingId, BookingRuleContext, BookingSummary, Error, page_request,
};

/// Client-facing message for storage outages. Driver detail is only logged.
pub const STORE_UNAVAILABLE_MESSAGE: &str = "Booking store temporarily unavailable";

fn map_repository_error(error: BookingRepositoryError) -> Error {
    match error {
        BookingRepositoryError::Connection { message } => {
            warn!(error = %message, "booking repository unavailable");
            Error::service_unavailable(STORE_UNAVAILABLE_MESSAGE)
        }
        BookingRepositoryError::Query { message } => {
            Error::internal(format!("booking repository error: {message}"))
        }
    }
}

/// Booking service implementing the command driving port.
#[derive(Clone)]
pub struct BookingCommandService<R> {
    booking_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> BookingCommandService<R> {
    /// Create a new command service.
    ///
    /// The clock supplies both the creation timestamp and the "today" used by
    /// the check-in rule.
    pub fn new(booking_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            booking_repo,
            clock,
        }
    }
}

#[async_trait]
impl<R> BookingCommand for BookingCommandService<R>
where
    R: BookingRepository,
{
    async fn create_booking(
        &self,
        request: CreateBookingRequest,
    ) -> Result<CreateBookingResponse, Error> {
        let now = self.clock.utc();
        let context = BookingRuleContext {
            today: now.date_naive(),
        };
        request.draft.validate(&context).map_err(|failures| {
            debug!(fields = %failures, "booking draft rejected");
            Error::validation(failures)
        })?;

        let booking = Booking::pending(BookingId::random(), request.draft, now);
        self.booking_repo
            .add(&booking)
            .await
            .map_err(map_repository_error)?;

        info!(booking_id = %booking.id(), room_id = booking.room_id(), "booking created");
        Ok(CreateBookingResponse::created(booking.id(), booking.status()))
    }
}

/// Booking service implementing the query driving port.
#[derive(Clone)]
pub struct BookingQueryService<R> {
    booking_repo: Arc<R>,
}

impl<R> BookingQueryService<R> {
    /// Create a new query service with the booking repository.
    pub fn new(booking_repo: Arc<R>) -> Self {
        Self { booking_repo }
    }
}

#[async_trait]
impl<R> BookingQuery for BookingQueryService<R>
where
    R: BookingRepository,
{
    async fn get_booking(&self, request: GetBookingRequest) -> Result<Option<Booking>, Error> {
        self.booking_repo
            .find_by_id(&request.booking_id)
            .await
            .map_err(map_repository_error)
    }

    async fn list_bookings(&self) -> Result<Vec<BookingSummary>, Error> {
        let bookings = self
            .booking_repo
            .list_all()
            .await
            .map_err(map_repository_error)?;
        Ok(bookings.iter().map(BookingSummary::from).collect())
    }

    async fn list_bookings_page(
        &self,
        request: ListBookingsPageRequest,
    ) -> Result<Paged<BookingSummary>, Error> {
        let page = page_request(request.page_number, request.page_size)
            .map_err(Error::validation)?;

        let slice = self
            .booking_repo
            .list_page(page)
            .await
            .map_err(map_repository_error)?;
        debug!(
            page_number = page.page_number(),
            returned = slice.bookings.len(),
            total = slice.total_count,
            "booking page read"
        );

        let summaries = slice.bookings.iter().map(BookingSummary::from).collect();
        Ok(Paged::new(summaries, slice.total_count, page))
    }
}

#[cfg(test)]
#[path = "booking_service_tests.rs"]
mod tests;
