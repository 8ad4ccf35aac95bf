//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`BookingCommand`], [`BookingQuery`]) are implemented by the
//! domain services and called from inbound adapters. The driven port
//! [`BookingRepository`] is implemented by outbound storage adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod booking_command;
mod booking_query;
mod booking_repository;

#[cfg(test)]
pub use booking_command::MockBookingCommand;
pub use booking_command::{
    BOOKING_CREATED_MESSAGE, BookingCommand, CreateBookingRequest, CreateBookingResponse,
};
#[cfg(test)]
pub use booking_query::MockBookingQuery;
pub use booking_query::{BookingQuery, GetBookingRequest, ListBookingsPageRequest};
#[cfg(test)]
pub use booking_repository::MockBookingRepository;
pub use booking_repository::{
    BookingRepository, BookingRepositoryError, BookingSlice, FixtureBookingRepository,
};
