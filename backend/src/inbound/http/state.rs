//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{BookingCommand, BookingQuery};

/// Dependency bundle for booking handlers.
#[derive(Clone)]
pub struct HttpState {
    pub bookings: Arc<dyn BookingCommand>,
    pub bookings_query: Arc<dyn BookingQuery>,
}

impl HttpState {
    /// Construct state from the booking driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use hotel_booking::domain::{BookingCommandService, BookingQueryService};
    /// use hotel_booking::inbound::http::state::HttpState;
    /// use hotel_booking::outbound::memory::InMemoryBookingRepository;
    /// use mockable::DefaultClock;
    ///
    /// let repo = Arc::new(InMemoryBookingRepository::default());
    /// let state = HttpState::new(
    ///     Arc::new(BookingCommandService::new(repo.clone(), Arc::new(DefaultClock))),
    ///     Arc::new(BookingQueryService::new(repo)),
    /// );
    /// let _query = state.bookings_query.clone();
    /// ```
    pub fn new(bookings: Arc<dyn BookingCommand>, bookings_query: Arc<dyn BookingQuery>) -> Self {
        Self {
            bookings,
            bookings_query,
        }
    }
}
