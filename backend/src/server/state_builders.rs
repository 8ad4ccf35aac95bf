//! Builders wiring booking services onto the configured storage adapter.

use std::sync::Arc;

use actix_web::web;
use mockable::Clock;

use hotel_booking::domain::ports::BookingRepository;
use hotel_booking::domain::{BookingCommandService, BookingQueryService};
use hotel_booking::inbound::http::state::HttpState;
use hotel_booking::outbound::memory::InMemoryBookingRepository;
use hotel_booking::outbound::persistence::DieselBookingRepository;
use tracing::warn;

use super::ServerConfig;

/// Build command and query services sharing one repository.
fn booking_state<R>(repo: Arc<R>, clock: Arc<dyn Clock>) -> HttpState
where
    R: BookingRepository + 'static,
{
    HttpState::new(
        Arc::new(BookingCommandService::new(repo.clone(), clock)),
        Arc::new(BookingQueryService::new(repo)),
    )
}

/// Build HTTP state for the configured store.
///
/// Uses PostgreSQL when a pool is attached, otherwise an in-memory store that
/// loses its contents on restart.
pub(super) fn build_http_state(
    config: &ServerConfig,
    clock: Arc<dyn Clock>,
) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => booking_state(Arc::new(DieselBookingRepository::new(pool.clone())), clock),
        None => {
            warn!("no database configured; bookings are kept in memory only");
            booking_state(Arc::new(InMemoryBookingRepository::new()), clock)
        }
    };
    web::Data::new(state)
}
