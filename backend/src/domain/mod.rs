//! Domain types, rules and services for hotel bookings.
//!
//! Purpose: keep booking semantics independent of HTTP and storage. Inbound
//! adapters call the driving ports in [`ports`]; outbound adapters implement
//! [`ports::BookingRepository`].
//!
//! Public surface:
//! - [`Booking`], [`BookingDraft`], [`BookingSummary`]: the aggregate, its
//!   unvalidated input and its list projection.
//! - [`BookingCommandService`], [`BookingQueryService`]: port implementations.
//! - [`Error`], [`ErrorCode`]: transport-agnostic failure payload.
//! - [`TraceId`]: request correlation identifier.

pub mod booking;
pub mod booking_events;
mod booking_service;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod validation;

pub use self::booking::{
    BOOKING_RULES, Booking, BookingDraft, BookingId, BookingRuleContext, BookingStatus,
    BookingSummary, page_request,
};
pub use self::booking_events::BookingCreated;
pub use self::booking_service::{
    BookingCommandService, BookingQueryService, STORE_UNAVAILABLE_MESSAGE,
};
pub use self::error::{Error, ErrorCode, VALIDATION_FAILED_MESSAGE};
pub use self::trace_id::TraceId;
pub use self::validation::ValidationErrors;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use hotel_booking::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("Booking with ID 42 not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
